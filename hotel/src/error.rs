//! Error taxonomy shared by every client surface.
//!
//! ERROR HANDLING
//! ==============
//! Every [`ApiError`] displays as text a view can show inline. Backend
//! rejections carry the backend's own wording when the payload has one
//! (`message`, then `error`), else the caller's generic fallback such as
//! `"Login failed"`. Nothing here retries.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure of a request against the hotel backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401: bad credentials or a stale/invalid bearer token.
    #[error("{message}")]
    Unauthorized { message: String },
    /// HTTP 403: the backend refused the caller's role.
    #[error("{message}")]
    Forbidden { message: String },
    /// Any other non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// A success response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Refused client-side by the advisory role policy; nothing was sent.
    #[error("{0}")]
    Denied(String),
    /// The call needs a browser and the current build has none.
    #[error("not available outside the browser")]
    NotAvailable,
}

impl ApiError {
    /// Classify a non-success response.
    ///
    /// `body` is the raw response text; `fallback` is used when it carries no
    /// readable message.
    #[must_use]
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| fallback.to_owned());
        match status {
            401 => Self::Unauthorized { message },
            403 => Self::Forbidden { message },
            _ => Self::Rejected { status, message },
        }
    }

    /// HTTP status behind this error, when there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::Rejected { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Denied(_) | Self::NotAvailable => None,
        }
    }

    /// Whether the backend rejected the caller's credentials or token.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Pull a human-readable message out of a backend error payload.
///
/// The services answer with either `{"message": ...}` or `{"error": ...}`;
/// `message` wins when both are present. Non-JSON bodies yield `None`.
#[must_use]
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    ["message", "error"].iter().find_map(|key| {
        object
            .get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(ToOwned::to_owned)
    })
}

/// Failure reading or writing the persisted token slot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing storage cannot be reached (no window, quota, permissions).
    #[error("session store unavailable: {0}")]
    Unavailable(String),
    /// Filesystem failure on a file-backed store.
    #[error("session store io failed: {0}")]
    Io(#[from] std::io::Error),
    /// The persisted slot exists but cannot be parsed.
    #[error("session store corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Invalid client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL `{0}`: expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}
