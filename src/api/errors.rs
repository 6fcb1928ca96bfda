//! API gateway errors.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the API gateway.
///
/// A request either fails in transport (no usable response) or is rejected
/// by the backend with a non-2xx status. Backend error bodies are reduced
/// to a normalized, human-readable message; raw response internals are
/// never carried verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable response was received (connectivity, DNS, protocol).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status {
        /// HTTP status returned by the backend.
        status: StatusCode,
        /// Normalized message extracted from the response body.
        message: String,
    },
}

impl ApiError {
    /// The backend-issued HTTP status, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(_) => None,
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// Reduce a backend error body to a single displayable message.
///
/// JSON bodies contribute their `message` or `error` field; short plain-text
/// bodies pass through as-is; anything else falls back to the HTTP reason
/// phrase.
pub(crate) fn normalize_error_body(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Value::String(text) = &value
            && !text.trim().is_empty()
        {
            return text.trim().to_string();
        }

        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(Value::as_str)
                && !text.trim().is_empty()
            {
                return text.trim().to_string();
            }
        }
    } else {
        let trimmed = body.trim();

        if !trimmed.is_empty() && trimmed.len() <= 200 && !trimmed.starts_with('<') {
            return trimmed.to_string();
        }
    }

    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
