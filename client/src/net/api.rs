//! REST transport for the browser.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with `ApiError::NotAvailable` so pages
//! and tests compile without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Status classification and message extraction live in
//! `hotel::request::interpret`; this module only moves bytes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use hotel::endpoints;
use hotel::{ApiConfig, ApiError, ApiRequest, AuthApi, AuthResponse, Credentials, RegistrationRequest};
use serde::de::DeserializeOwned;

/// Backend base URL baked in at build time.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
const BUILD_API_URL: Option<&str> = option_env!("HOTEL_API_URL");

/// Resolve the backend base URL. A malformed value falls back to the default
/// rather than breaking every request.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn resolve_config(raw: Option<&str>) -> ApiConfig {
    ApiConfig::from_value(raw).unwrap_or_else(|_e| {
        #[cfg(feature = "csr")]
        log::warn!("ignoring HOTEL_API_URL: {_e}");
        ApiConfig::default()
    })
}

/// Send `request` and decode a JSON success body.
///
/// # Errors
///
/// Any [`ApiError`]; `NotAvailable` outside the browser.
pub async fn execute<T: DeserializeOwned>(request: ApiRequest) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (status, body) = send(&request).await?;
        hotel::request::interpret(status, &body, request.fallback)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::NotAvailable)
    }
}

/// Send `request`, ignoring the success body.
///
/// # Errors
///
/// Any [`ApiError`]; `NotAvailable` outside the browser.
pub async fn execute_unit(request: ApiRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let (status, body) = send(&request).await?;
        hotel::request::interpret_unit(status, &body, request.fallback)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::NotAvailable)
    }
}

#[cfg(feature = "csr")]
async fn send(request: &ApiRequest) -> Result<(u16, String), ApiError> {
    use gloo_net::http::{Method as HttpMethod, RequestBuilder};
    use hotel::Method;

    let method = match request.method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Put => HttpMethod::PUT,
        Method::Delete => HttpMethod::DELETE,
    };
    let url = resolve_config(BUILD_API_URL).url(&request.path);
    let mut builder = RequestBuilder::new(&url)
        .method(method)
        .query(request.query.iter().map(|(name, value)| (*name, value.as_str())));
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let built = match &request.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = built.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Ok((status, body))
}

/// [`AuthApi`] over the browser transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAuthApi;

#[async_trait::async_trait(?Send)]
impl AuthApi for BrowserAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        execute(endpoints::login(credentials)).await
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<AuthResponse, ApiError> {
        execute(endpoints::register(request)).await
    }
}
