use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::TaxBracket;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The request never produced a response (connect failure, timeout, reset).
    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("rate source status: {status}")]
    UpstreamStatus { status: u16 },

    #[error("malformed rate payload: {message}")]
    Decode { message: String },

    #[error("empty tax brackets for year {year}")]
    EmptyBrackets { year: i32 },

    #[error("no tax brackets known for year {year}")]
    YearNotFound { year: i32 },

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl ProviderError {
    /// Whether another attempt might succeed.
    ///
    /// Only transport failures and 5xx responses qualify; every other error
    /// is surfaced to the caller as-is.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::UpstreamStatus { status } => {
                classify_status(*status) == StatusClass::Retryable
            }
            Self::Decode { .. }
            | Self::EmptyBrackets { .. }
            | Self::YearNotFound { .. }
            | Self::Configuration { .. } => false,
        }
    }
}

/// How an upstream HTTP status is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Retryable,
    Permanent,
}

/// Classify a status code from the rate source.
///
/// `200` is the only success; any `5xx` is transient; everything else
/// (including other `2xx` and `3xx`) is a permanent failure.
pub fn classify_status(status: u16) -> StatusClass {
    match status {
        200 => StatusClass::Success,
        500..=599 => StatusClass::Retryable,
        _ => StatusClass::Permanent,
    }
}

/// Source of per-year bracket tables.
///
/// Implementations hand out shared, read-only bracket lists ordered by
/// ascending `min`.
#[async_trait]
pub trait TaxRateProvider: Send + Sync {
    async fn get_tax_brackets(&self, year: i32) -> Result<Arc<[TaxBracket]>, ProviderError>;
}
