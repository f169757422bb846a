use crate::core::config::ExchangeRateApiConfig;
use crate::core::{ConversionError, RateProvider, RateTable};
use crate::providers::util::with_retry;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

const USER_AGENT: &str = concat!("fxconv/", env!("CARGO_PKG_VERSION"));
const RETRY_DELAY_MS: u64 = 500;

/// Client for the exchangerate-api.com `v4/latest` endpoint.
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: Option<String>,
    retries: usize,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
            retries: 0,
        }
    }

    pub fn from_config(config: &ExchangeRateApiConfig) -> Self {
        ExchangeRateApiProvider {
            api_key: config.api_key.clone(),
            retries: config.retries,
            ..Self::new(&config.base_url)
        }
    }

    pub fn with_retries(mut self, retries: usize) -> Self {
        self.retries = retries;
        self
    }
}

// Only `rates` is consumed; `base`, `date` and friends are ignored.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(
        name = "ExchangeRateFetch",
        skip(self),
        fields(base = %base, has_api_key = self.api_key.is_some())
    )]
    async fn fetch_rates(&self, base: &str) -> Result<RateTable, ConversionError> {
        let url = format!("{}/v4/latest/{}", self.base_url, base);
        debug!("Requesting exchange rates from {}", url);

        let transport = |source: reqwest::Error| ConversionError::Transport {
            base: base.to_string(),
            source,
        };

        // No credentials are sent, even when an API key is configured.
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(transport)?;

        let (status, text) = with_retry(
            || async {
                let response = client.get(&url).send().await.map_err(transport)?;
                let status = response.status();
                let text = response.text().await.map_err(transport)?;
                Ok::<_, ConversionError>((status, text))
            },
            ConversionError::is_retryable,
            self.retries,
            RETRY_DELAY_MS,
        )
        .await?;

        debug!(%status, "Received exchange rate response");

        let data: LatestRatesResponse = serde_json::from_str(&text).map_err(|e| {
            let reason = if status.is_success() {
                e.to_string()
            } else {
                format!("HTTP {status}: {e}")
            };
            ConversionError::MalformedResponse {
                base: base.to_string(),
                reason,
            }
        })?;

        debug!(count = data.rates.len(), "Parsed exchange rates");
        Ok(RateTable::new(base, data.rates))
    }
}
