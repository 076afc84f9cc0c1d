//! Client-side API error taxonomy.

use thiserror::Error;

use crate::models::ApiResponse;

/// Failure modes of a REST call, from the client's point of view.
///
/// `Network` covers transport/connectivity failures and is surfaced as a
/// generic error; `Http` carries whatever body the server returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

/// Attempt to pull a user-facing message out of an error response body.
/// The server wraps application failures in the common `{success, message}`
/// envelope even on non-2xx statuses.
pub fn try_response_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ApiResponse>(body).ok()?;
    match parsed.message {
        Some(message) if !message.trim().is_empty() => Some(message),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_server_message_from_error_body() {
        let body = r#"{"success": false, "message": "Room is full"}"#;
        assert_eq!(try_response_message(body), Some("Room is full".to_string()));
    }

    #[test]
    fn ignores_bodies_without_a_message() {
        assert_eq!(try_response_message(r#"{"success": false}"#), None);
        assert_eq!(try_response_message("<html>502</html>"), None);
        assert_eq!(
            try_response_message(r#"{"success": false, "message": "  "}"#),
            None
        );
    }
}
