//! Errors surfaced by the request pipeline.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// 401 on an authenticated request. The session has already been cleared.
    #[error("session expired, please sign in again")]
    Unauthorized,

    /// Any other non-2xx response.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
        error: Option<String>,
    },

    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Rejected locally before any request was sent.
    #[error("{0}")]
    Validation(String),
}

/// Optional error body the API attaches to failures.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        ApiError::Status {
            status,
            message: parsed.message.filter(|m| !m.trim().is_empty()),
            error: parsed.error.filter(|e| !e.trim().is_empty()),
        }
    }

    /// Text for the inline error slot of a view: the server's message when it
    /// sent one, the validation text for local failures, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }

    /// The machine-readable `error` field of a failed response.
    pub fn server_error(&self) -> Option<&str> {
        match self {
            ApiError::Status { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_body_is_parsed() {
        let err = ApiError::from_status(409, r#"{"message": "Dates taken", "error": "Conflict"}"#);
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message("fallback"), "Dates taken");
        assert_eq!(err.server_error(), Some("Conflict"));
    }

    #[test]
    fn missing_or_blank_message_uses_fallback() {
        assert_eq!(
            ApiError::from_status(500, "Internal Server Error").user_message("Failed"),
            "Failed"
        );
        assert_eq!(
            ApiError::from_status(500, r#"{"message": "  "}"#).user_message("Failed"),
            "Failed"
        );
        assert_eq!(ApiError::Network("down".into()).user_message("Failed"), "Failed");
    }

    #[test]
    fn validation_text_is_shown_as_is() {
        let err = ApiError::Validation("Please login to make a reservation".into());
        assert_eq!(err.user_message("x"), "Please login to make a reservation");
        assert_eq!(err.to_string(), "Please login to make a reservation");
    }
}
