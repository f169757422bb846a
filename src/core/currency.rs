//! Currency definitions and the catalog of supported currencies.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A currency identified by its three-letter code.
///
/// Equality only considers the code; the display name is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

impl Currency {
    pub fn new(code: &str, name: &str) -> Self {
        Currency {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    /// Three ASCII letters, any case.
    pub fn is_valid_code(code: &str) -> bool {
        code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

const REFERENCE_CATALOG: [(&str, &str); 14] = [
    ("ARS", "Peso Argentino"),
    ("AUD", "Dólar Australia"),
    ("BRL", "Real Brasil"),
    ("CAD", "Dólar Canada"),
    ("CHF", "Franco Suizo"),
    ("CLP", "Peso Chileno"),
    ("COP", "Peso Colombia"),
    ("EUR", "Euro"),
    ("GBP", "Libra Esterlina"),
    ("JPY", "Yen Japonés"),
    ("MXN", "Peso Mexicano"),
    ("PEN", "Sol Peruano"),
    ("USD", "Dólar USA"),
    ("UYU", "Peso Uruguayo"),
];

/// The ordered, immutable set of currencies offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    currencies: Vec<Currency>,
}

impl Catalog {
    pub fn new(currencies: Vec<Currency>) -> Self {
        Catalog { currencies }
    }

    /// Looks up a currency by code, ignoring the case of `code`.
    pub fn find(&self, code: &str) -> Option<&Currency> {
        self.currencies
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.iter()
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new(
            REFERENCE_CATALOG
                .iter()
                .map(|(code, name)| Currency::new(code, name))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 14);
        let codes: Vec<&str> = catalog.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes.first(), Some(&"ARS"));
        assert_eq!(codes.last(), Some(&"UYU"));
        assert!(catalog.iter().all(|c| Currency::is_valid_code(&c.code)));
        assert_eq!(catalog.find("USD").unwrap().name, "Dólar USA");
    }

    #[test]
    fn test_find_ignores_input_case() {
        let catalog = Catalog::default();
        assert_eq!(catalog.find("eur").unwrap().code, "EUR");
        assert_eq!(catalog.find("jpy").unwrap().code, "JPY");
        assert!(catalog.find("INR").is_none());
    }

    #[test]
    fn test_currency_equality_uses_code_only() {
        let a = Currency::new("USD", "Dólar USA");
        let b = Currency::new("USD", "US Dollar");
        let c = Currency::new("usd", "Dólar USA");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_currency_display() {
        let currency = Currency::new("USD", "Dólar USA");
        assert_eq!(currency.to_string(), "USD - Dólar USA");
    }

    #[test]
    fn test_is_valid_code() {
        assert!(Currency::is_valid_code("USD"));
        assert!(Currency::is_valid_code("usd"));
        assert!(!Currency::is_valid_code("US"));
        assert!(!Currency::is_valid_code("US1"));
        assert!(!Currency::is_valid_code("USDT"));
    }
}
