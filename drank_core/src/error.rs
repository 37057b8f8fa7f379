//! Error types for the drank_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for drank_core operations
///
/// The calculators themselves never fail; these errors come from the
/// input boundary and from configuration handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A form field could not be parsed or is out of range
    #[error("Invalid {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}
