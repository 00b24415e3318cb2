//! Error types for API requests.
//!
//! Every failure an action creator can hit lands in one of these
//! variants before the shared error handler turns it into a `FAILED` event.

use reqwest::StatusCode;
use thiserror::Error;

use super::upload::UploadError;

/// Errors that can occur while talking to the platform.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// An endpoint URL could not be assembled
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Network or transport failure before a response arrived
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Server returned {status}: {reason}")]
    Status { status: u16, reason: String },

    /// Response body did not have the expected shape
    #[error("Unexpected response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Upload payload could not be prepared
    #[error("Invalid upload: {0}")]
    InvalidUpload(#[from] UploadError),
}

impl ApiError {
    /// HTTP status of the failure, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Short machine-readable error kind.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Transport { .. } => "transport_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::InvalidUpload(_) => "invalid_upload",
        }
    }

    /// Human-readable reason shown in the error slice.
    pub fn reason(&self) -> String {
        match self {
            ApiError::Status { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}

/// Build a status error from a response body.
///
/// Prefers the JSON `detail` field, then the raw body, then the
/// canonical reason phrase.
pub(crate) fn status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let detail = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|json| match json.get("detail") {
            Some(serde_json::Value::String(detail)) => Some(detail.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        });

    let reason = detail
        .or_else(|| {
            let text = String::from_utf8_lossy(body).trim().to_string();
            (!text.is_empty()).then_some(text)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string()
        });

    ApiError::Status {
        status: status.as_u16(),
        reason,
    }
}
