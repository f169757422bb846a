//! Error types for currency conversion.

use thiserror::Error;

/// Errors that can occur while validating or performing a conversion.
///
/// `Transport`, `MalformedResponse` and `RateNotFound` come from the engine and
/// the rate provider. `InvalidAmount`, `SameCurrency` and `UnknownCurrency` are
/// raised by [`ConversionRequest::parse`](crate::core::ConversionRequest::parse)
/// before any network call is made.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The rate service could not be reached or the response could not be read.
    #[error("Request error for base currency {base}: {source}")]
    Transport {
        base: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not JSON or did not carry a `rates` object.
    #[error("Malformed response for base currency {base}: {reason}")]
    MalformedResponse { base: String, reason: String },

    /// The rate table has no entry for the target currency.
    #[error("No rate found for {target} in rates for base currency {base}")]
    RateNotFound { base: String, target: String },

    /// The amount text is not a number.
    #[error("Invalid amount: '{0}' is not a number")]
    InvalidAmount(String),

    /// Source and target currencies are the same.
    #[error("Source and target currency cannot be the same: {0}")]
    SameCurrency(String),

    /// The currency code is not part of the configured catalog.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

impl ConversionError {
    /// Whether another attempt could succeed. Only transport failures qualify.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ConversionError::Transport { .. })
    }
}
