//! The conversion engine and the request/result values around it.
use crate::core::currency::Catalog;
use crate::core::error::ConversionError;
use crate::core::rates::RateProvider;
use chrono::{DateTime, Utc};
use tracing::debug;

/// A validated conversion request.
///
/// Built with [`ConversionRequest::parse`], which performs the checks a front
/// end must run before calling the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub source: String,
    pub target: String,
    pub amount: f64,
}

impl ConversionRequest {
    /// Validates user input against `catalog`.
    ///
    /// Codes are matched case-insensitively and stored in the catalog's
    /// spelling. Checks run in order: known currencies, distinct currencies,
    /// then a finite, non-negative amount.
    pub fn parse(
        source: &str,
        target: &str,
        amount: &str,
        catalog: &Catalog,
    ) -> Result<Self, ConversionError> {
        let source = catalog
            .find(source.trim())
            .ok_or_else(|| ConversionError::UnknownCurrency(source.to_string()))?;
        let target = catalog
            .find(target.trim())
            .ok_or_else(|| ConversionError::UnknownCurrency(target.to_string()))?;

        if source == target {
            return Err(ConversionError::SameCurrency(source.code.clone()));
        }

        let value = amount
            .trim()
            .parse::<f64>()
            .map_err(|_| ConversionError::InvalidAmount(amount.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(ConversionError::InvalidAmount(amount.to_string()));
        }
        // Turns "-0" into 0.0.
        let value = value + 0.0;

        Ok(ConversionRequest {
            source: source.code.clone(),
            target: target.code.clone(),
            amount: value,
        })
    }
}

/// Outcome of a single conversion. Values are unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub amount: f64,
    pub source: String,
    pub target: String,
    pub rate: f64,
    pub converted_amount: f64,
    /// When the rate table used for this conversion was received.
    pub rates_as_of: DateTime<Utc>,
}

/// Converts amounts using rates fetched fresh from `P` on every call.
pub struct Converter<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> Converter<P> {
    pub fn new(provider: P) -> Self {
        Converter { provider }
    }

    /// Converts `amount` from `source` to `target`.
    ///
    /// Neither the codes nor the amount are validated here; a negative amount
    /// simply scales the rate.
    pub async fn convert(
        &self,
        source: &str,
        target: &str,
        amount: f64,
    ) -> Result<ConversionResult, ConversionError> {
        let table = self.provider.fetch_rates(source).await?;
        let rate = table
            .rate(target)
            .ok_or_else(|| ConversionError::RateNotFound {
                base: source.to_string(),
                target: target.to_string(),
            })?;
        debug!(source, target, rate, "Using exchange rate");

        Ok(ConversionResult {
            amount,
            source: source.to_string(),
            target: target.to_string(),
            rate,
            converted_amount: amount * rate,
            rates_as_of: table.fetched_at,
        })
    }

    pub async fn convert_request(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConversionError> {
        self.convert(&request.source, &request.target, request.amount)
            .await
    }
}
