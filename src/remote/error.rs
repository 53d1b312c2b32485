//! Remote call failures

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Why a backend call failed.
///
/// Kept `Clone` so the last failure can sit in a published state snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, broken body stream
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// Response body did not match the expected JSON shape
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Server {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
