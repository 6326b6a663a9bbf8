//! Response envelope and exit-code mapping
//!
//! Every HTTP response is folded into an [`Envelope`] carrying the success
//! flag, the raw status, and the parsed payload or error body. Exit codes:
//! 0 for success, 2 for auth/server failures (401, 5xx) and anything
//! unmapped, 1 for other client errors.

use reqwest::StatusCode;
use serde_json::Value;

use super::error::{ApiError, Result};

/// Outcome of a single API call
#[derive(Debug, Clone)]
pub struct Envelope {
    pub success: bool,
    pub status: u16,
    pub payload: Value,
    pub error: Value,
}

impl Envelope {
    /// Folds a status and decoded body into an envelope
    pub fn from_parts(status: StatusCode, body: Value) -> Self {
        if status.is_success() {
            Self {
                success: true,
                status: status.as_u16(),
                payload: body,
                error: Value::Null,
            }
        } else {
            Self {
                success: false,
                status: status.as_u16(),
                payload: Value::Null,
                error: body,
            }
        }
    }

    /// Reads a response body and folds it into an envelope.
    ///
    /// Non-JSON bodies are kept verbatim as a string value so error text
    /// from proxies still reaches the user.
    pub async fn from_response(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let text = response.text().await?;

        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(Self::from_parts(status, body))
    }

    /// Process exit code for this envelope
    pub fn exit_code(&self) -> u8 {
        if self.success {
            0
        } else {
            ecode_for_status(self.status)
        }
    }

    /// Returns the payload on success, or the error body as an [`ApiError`]
    /// that keeps the status-derived exit code.
    pub fn into_payload(self) -> Result<Value> {
        if self.success {
            Ok(self.payload)
        } else {
            let message = serde_json::to_string_pretty(&self.error)
                .unwrap_or_else(|_| self.error.to_string());
            Err(ApiError::Api {
                status: self.status,
                message,
            })
        }
    }
}

/// Exit code for a failure status: 401 and server errors are operational
/// failures (2), other client errors are request failures (1).
pub(crate) fn ecode_for_status(status: u16) -> u8 {
    match status {
        200..=299 => 0,
        401 => 2,
        500..=599 => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope() {
        let env = Envelope::from_parts(StatusCode::OK, json!({"active": true}));

        assert!(env.success);
        assert_eq!(env.status, 200);
        assert_eq!(env.exit_code(), 0);
        assert_eq!(env.error, Value::Null);
        assert_eq!(env.into_payload().unwrap(), json!({"active": true}));
    }

    #[test]
    fn failure_envelope_keeps_error_body() {
        let body = json!({"message": "subscription not found"});
        let env = Envelope::from_parts(StatusCode::NOT_FOUND, body.clone());

        assert!(!env.success);
        assert_eq!(env.payload, Value::Null);
        assert_eq!(env.error, body);

        let err = env.into_payload().unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("subscription not found"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn exit_code_mapping() {
        let cases = [
            (StatusCode::OK, 0),
            (StatusCode::CREATED, 0),
            (StatusCode::BAD_REQUEST, 1),
            (StatusCode::NOT_FOUND, 1),
            (StatusCode::UNAUTHORIZED, 2),
            (StatusCode::INTERNAL_SERVER_ERROR, 2),
            (StatusCode::BAD_GATEWAY, 2),
        ];

        for (status, expected) in cases {
            let env = Envelope::from_parts(status, Value::Null);
            assert_eq!(env.exit_code(), expected, "status {status}");
        }
    }

    #[test]
    fn api_error_exit_code_follows_status() {
        let not_found = Envelope::from_parts(StatusCode::NOT_FOUND, Value::Null)
            .into_payload()
            .unwrap_err();
        assert_eq!(not_found.exit_code(), 1);

        let unauthorized = Envelope::from_parts(StatusCode::UNAUTHORIZED, Value::Null)
            .into_payload()
            .unwrap_err();
        assert_eq!(unauthorized.exit_code(), 2);
    }
}
