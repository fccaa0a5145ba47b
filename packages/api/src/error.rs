//! Normalized request failures.
//!
//! Every failure surfaces to the user as one line of text. The message is
//! chosen in order of usefulness: the server's own `error` (or `message`) field,
//! then the transport's description, then a generic fallback.

use serde::Deserialize;

/// Generic text shown when nothing better is known.
pub const UNEXPECTED_ERROR: &str = "Unexpected error";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with an error payload.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request failed below the application layer, or the server's error
    /// response carried no usable message.
    #[error("{0}")]
    Transport(String),

    #[error("Unexpected error")]
    Unexpected,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Build the error for a non-success response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let server_message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error.or(b.message))
            .filter(|m| !m.trim().is_empty());

        match server_message {
            Some(message) => ApiError::Server { status, message },
            None => ApiError::from_transport(format!("Request failed with status code {status}")),
        }
    }

    /// Build the error for a failure with only a transport description.
    pub fn from_transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            ApiError::Unexpected
        } else {
            ApiError::Transport(message)
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => ApiError::from_response(status.as_u16(), ""),
            None => ApiError::from_transport(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_field_wins() {
        let err = ApiError::from_response(400, r#"{"error":"Email already in use"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: "Email already in use".into()
            }
        );
        assert_eq!(err.to_string(), "Email already in use");
    }

    #[test]
    fn test_message_field_is_accepted() {
        let err = ApiError::from_response(403, r#"{"message":"Forbidden"}"#);
        assert_eq!(err.to_string(), "Forbidden");
    }

    #[test]
    fn test_non_json_body_falls_back_to_status_text() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err,
            ApiError::Transport("Request failed with status code 502".into())
        );
    }

    #[test]
    fn test_blank_server_message_falls_back() {
        let err = ApiError::from_response(500, r#"{"error":"  "}"#);
        assert_eq!(err.to_string(), "Request failed with status code 500");
    }

    #[test]
    fn test_empty_transport_message_is_unexpected() {
        assert_eq!(ApiError::from_transport(""), ApiError::Unexpected);
        assert_eq!(ApiError::Unexpected.to_string(), UNEXPECTED_ERROR);
    }
}
