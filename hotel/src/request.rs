//! Transport-neutral request descriptions.
//!
//! DESIGN
//! ======
//! Endpoint builders in [`crate::endpoints`] produce an [`ApiRequest`]; each
//! client owns one small function that sends it (`gloo-net` in the browser,
//! `reqwest` in the CLI) and hands the status and body back to [`interpret`].
//! That keeps paths, headers and error classification in one tested place.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::model::Role;

pub const AUTHORIZATION: &str = "Authorization";
/// Advisory role hint read by several backend endpoints.
pub const X_USER_ROLE: &str = "X-User-Role";
/// Advisory actor hint read by booking and payment endpoints.
pub const X_USER_EMAIL: &str = "X-User-Email";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One backend call, ready to be sent by any HTTP client.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base URL, always starting with `/`.
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
    /// Message shown when a failure response carries no readable text.
    pub fallback: &'static str,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, fallback: &'static str) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            fallback,
        }
    }

    #[must_use]
    pub fn query(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach `Authorization: Bearer <token>`.
    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.headers.push((AUTHORIZATION, format!("Bearer {token}")));
        self
    }

    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.headers.push((X_USER_ROLE, role.as_str().to_owned()));
        self
    }

    #[must_use]
    pub fn email(mut self, email: &str) -> Self {
        self.headers.push((X_USER_EMAIL, email.to_owned()));
        self
    }

    /// Value of the first header named `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Turn a raw response into a typed value or a classified error.
///
/// # Errors
///
/// Non-2xx statuses become [`ApiError::from_status`]; a 2xx body that does not
/// decode as `T` becomes [`ApiError::Decode`].
pub fn interpret<T: DeserializeOwned>(status: u16, body: &str, fallback: &str) -> Result<T, ApiError> {
    check_status(status, body, fallback)?;
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Like [`interpret`] for endpoints whose success body is irrelevant
/// (deletes answer with plain text).
///
/// # Errors
///
/// Non-2xx statuses become [`ApiError::from_status`].
pub fn interpret_unit(status: u16, body: &str, fallback: &str) -> Result<(), ApiError> {
    check_status(status, body, fallback)
}

fn check_status(status: u16, body: &str, fallback: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::from_status(status, body, fallback))
    }
}
