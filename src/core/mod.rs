//! Core business logic abstractions

pub mod config;
pub mod conversion;
pub mod currency;
pub mod error;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use conversion::{ConversionRequest, ConversionResult, Converter};
pub use currency::{Catalog, Currency};
pub use error::ConversionError;
pub use rates::{RateProvider, RateTable};
