use crate::core::currency::{Catalog, Currency};
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_EXCHANGERATE_API_URL: &str = "https://api.exchangerate-api.com";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExchangeRateApiConfig {
    pub base_url: String,
    /// Held for the account but never attached to requests.
    pub api_key: Option<String>,
    /// Extra attempts on transport errors. Zero means a single attempt.
    #[serde(default)]
    pub retries: usize,
}

impl Default for ExchangeRateApiConfig {
    fn default() -> Self {
        ExchangeRateApiConfig {
            base_url: DEFAULT_EXCHANGERATE_API_URL.to_string(),
            api_key: None,
            retries: 0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub exchangerate_api: Option<ExchangeRateApiConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            exchangerate_api: Some(ExchangeRateApiConfig::default()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    pub currencies: Option<Vec<Currency>>,
}

impl AppConfig {
    /// Loads the default config file, falling back to built-in defaults when
    /// it does not exist.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config = Self::from_yaml(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut config: Self = serde_yaml::from_str(yaml)?;
        config.normalize()?;
        Ok(config)
    }

    /// Uppercases configured currency codes and rejects an unusable catalog.
    fn normalize(&mut self) -> Result<()> {
        if let Some(currencies) = self.currencies.as_mut() {
            if currencies.is_empty() {
                bail!("Currency catalog must not be empty");
            }
            let mut seen = HashSet::new();
            for currency in currencies.iter_mut() {
                if !Currency::is_valid_code(&currency.code) {
                    bail!("Invalid currency code: '{}'", currency.code);
                }
                currency.code = currency.code.to_ascii_uppercase();
                if !seen.insert(currency.code.clone()) {
                    bail!("Duplicate currency code: '{}'", currency.code);
                }
            }
        }
        Ok(())
    }

    pub fn catalog(&self) -> Catalog {
        self.currencies
            .clone()
            .map_or_else(Catalog::default, Catalog::new)
    }

    pub fn exchangerate_api(&self) -> ExchangeRateApiConfig {
        self.providers.exchangerate_api.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  exchangerate_api:
    base_url: "http://example.com/rates"
    api_key: "secret"
    retries: 2
currencies:
  - code: "usd"
    name: "Dólar USA"
  - code: "EUR"
    name: "Euro"
"#;

        let config = AppConfig::from_yaml(yaml_str).expect("Failed to deserialize");
        let provider = config.exchangerate_api();
        assert_eq!(provider.base_url, "http://example.com/rates");
        assert_eq!(provider.api_key.as_deref(), Some("secret"));
        assert_eq!(provider.retries, 2);

        let catalog = config.catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("USD").unwrap().name, "Dólar USA");
        assert!(catalog.find("JPY").is_none());
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = AppConfig::from_yaml("{}").expect("Failed to deserialize");
        let provider = config.exchangerate_api();
        assert_eq!(provider.base_url, DEFAULT_EXCHANGERATE_API_URL);
        assert!(provider.api_key.is_none());
        assert_eq!(provider.retries, 0);
        assert_eq!(config.catalog(), Catalog::default());
    }

    #[test]
    fn test_retries_default_to_zero() {
        let yaml_str = r#"
providers:
  exchangerate_api:
    base_url: "http://example.com"
"#;
        let config = AppConfig::from_yaml(yaml_str).unwrap();
        assert_eq!(config.exchangerate_api().retries, 0);
    }

    #[test]
    fn test_rejects_invalid_catalog() {
        assert!(AppConfig::from_yaml("currencies: []").is_err());

        let yaml_str = r#"
currencies:
  - code: "DOLLAR"
    name: "Dollar"
"#;
        let err = AppConfig::from_yaml(yaml_str).unwrap_err();
        assert!(err.to_string().contains("Invalid currency code"));
    }

    #[test]
    fn test_rejects_duplicate_codes() {
        let yaml_str = r#"
currencies:
  - code: "usd"
    name: "Dólar USA"
  - code: "USD"
    name: "US Dollar"
"#;
        let err = AppConfig::from_yaml(yaml_str).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate currency code: 'USD'");
    }

    #[test]
    fn test_load_from_path() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        fs::write(
            file.path(),
            "providers:\n  exchangerate_api:\n    base_url: \"http://localhost:1234\"\n",
        )?;
        let config = AppConfig::load_from_path(file.path())?;
        assert_eq!(config.exchangerate_api().base_url, "http://localhost:1234");
        Ok(())
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let err = AppConfig::load_from_path("/nonexistent/fxconv/config.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
