//! Error types for the API client

use thiserror::Error;

/// Errors raised while talking to the subscription API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL does not parse
    #[error("Invalid API URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The service answered with an error envelope
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Process exit code for this error. Service errors keep the code
    /// derived from their HTTP status; everything else exits 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            ApiError::Api { status, .. } => super::envelope::ecode_for_status(*status),
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
