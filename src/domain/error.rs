use std::io;

use thiserror::Error;

/// Library-wide error type for cartctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Catalog item identifier does not have the `<productId>:<skuId>` shape.
    #[error("Malformed catalog item id '{0}': expected '<productId>:<skuId>'")]
    MalformedIdentifier(String),

    /// SKU lookup against the catalog service failed.
    #[error("SKU lookup failed: {message}")]
    LookupFailed { message: String, status: Option<u16> },

    /// Cart submission against the cart service failed.
    #[error("Cart submission failed: {message}")]
    SubmissionFailed { message: String, status: Option<u16> },

    /// The SKU declares no billing cycle to purchase under.
    #[error("SKU '{sku_id}' does not declare any supported billing cycle")]
    NoBillingCycle { sku_id: String },

    /// Reading operator input failed.
    #[error("Failed to read {what}: {details}")]
    Prompt { what: String, details: String },

    /// Operator cancelled an interactive prompt.
    #[error("Input cancelled")]
    Interrupted,

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// HTTP status reported by the remote service, when the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::LookupFailed { status, .. } | AppError::SubmissionFailed { status, .. } => {
                *status
            }
            _ => None,
        }
    }
}
