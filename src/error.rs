use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a payment instrument was rejected.
///
/// Every variant is local and non-fatal: it is reported back to the caller
/// as a tag and never aborts a batch.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    #[error("malformed VPA")]
    MalformedVpa,
    #[error("invalid card number")]
    InvalidCardNumber,
    #[error("invalid card expiry")]
    InvalidExpiry,
    #[error("unsupported payment method")]
    UnsupportedMethod,
}

impl ValidationError {
    /// Stable machine-readable tag, e.g. `INVALID_EXPIRY`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedVpa => "MALFORMED_VPA",
            Self::InvalidCardNumber => "INVALID_CARD_NUMBER",
            Self::InvalidExpiry => "INVALID_EXPIRY",
            Self::UnsupportedMethod => "UNSUPPORTED_METHOD",
        }
    }

    /// Code used in the gateway's public error body.
    pub fn api_code(&self) -> &'static str {
        match self {
            Self::MalformedVpa => "INVALID_VPA",
            Self::InvalidCardNumber => "INVALID_CARD",
            Self::InvalidExpiry => "EXPIRED_CARD",
            Self::UnsupportedMethod => "BAD_REQUEST_ERROR",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::MalformedVpa => "Invalid VPA format",
            Self::InvalidCardNumber => "Invalid card number",
            Self::InvalidExpiry => "Card expiry date invalid",
            Self::UnsupportedMethod => "method must be one of: upi, card",
        }
    }
}

/// Error body returned to API clients: `{"error":{"code":..,"description":..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub description: &'static str,
}

impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        Self {
            error: ErrorDetail {
                code: err.api_code(),
                description: err.description(),
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
