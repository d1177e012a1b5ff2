//! Normalized device API errors.
//!
//! Every client method resolves to one of three outcomes the rest of the
//! application can act on uniformly: transport failure (no response
//! obtained), rejection by the device (status >= 400), or an unreadable
//! success body. Callers treat any error as "the operation did not happen"
//! and leave prior state intact.

use thiserror::Error;

use crate::wire::ErrorBody;

/// Result type alias for device API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No response could be obtained from the device.
    #[error("connection failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The device answered with an error status. `message` carries the
    /// device's own `{"error": ...}` text when it sent one.
    #[error("device rejected request (status {status}): {message}")]
    Status { status: u16, message: String },

    /// The device answered with a success status but an unparseable body.
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Toast title for this error.
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "Connection error",
            ApiError::Status { .. } | ApiError::Decode(_) => "Error",
        }
    }

    /// User-facing message for this error.
    ///
    /// Device-provided messages are surfaced verbatim; transport and decode
    /// failures get generic text since their `reqwest` details are only
    /// useful in the log.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Could not connect to the device".to_string(),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Decode(_) => "The device sent an unreadable response".to_string(),
        }
    }
}

/// Extract the user-facing message from an error response body.
///
/// The device convention is `{"error": "..."}`; anything else (missing
/// field, non-JSON body) falls back to a generic message carrying the
/// status code.
pub fn status_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| format!("The device returned status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_uses_device_error_field() {
        let msg = status_message(404, br#"{"error": "not found"}"#);
        assert_eq!(msg, "not found");
    }

    #[test]
    fn test_status_message_falls_back_without_error_field() {
        let msg = status_message(500, br#"{"detail": "boom"}"#);
        assert_eq!(msg, "The device returned status 500");
    }

    #[test]
    fn test_status_message_falls_back_on_non_json_body() {
        let msg = status_message(502, b"<html>bad gateway</html>");
        assert_eq!(msg, "The device returned status 502");
    }

    #[test]
    fn test_status_error_user_message_is_verbatim() {
        let err = ApiError::Status {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.user_message(), "not found");
        assert_eq!(err.title(), "Error");
    }
}
