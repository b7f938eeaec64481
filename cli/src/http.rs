//! reqwest transport for [`ApiRequest`].

use async_trait::async_trait;
use hotel::model::{AuthResponse, Credentials, RegistrationRequest};
use hotel::request::{interpret, interpret_unit};
use hotel::{ApiConfig, ApiError, ApiRequest, AuthApi, Method, endpoints};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Sends endpoint requests to one backend.
#[derive(Clone, Debug)]
pub struct RestClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl RestClient {
    /// # Errors
    ///
    /// Returns the reqwest error when the TLS backend cannot be set up.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send `request` and decode a JSON success body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] when no response arrives, otherwise whatever
    /// [`interpret`] makes of the status and body.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let (status, body) = self.send(&request).await?;
        interpret(status, &body, request.fallback)
    }

    /// Send `request` and only check the status.
    ///
    /// # Errors
    ///
    /// Same as [`RestClient::execute`], minus decoding.
    pub async fn execute_unit(&self, request: ApiRequest) -> Result<(), ApiError> {
        let (status, body) = self.send(&request).await?;
        interpret_unit(status, &body, request.fallback)
    }

    async fn send(&self, request: &ApiRequest) -> Result<(u16, String), ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        debug!(method = %method, path = %request.path, "http: sending");

        let mut builder = self.http.request(method, self.config.url(&request.path));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        debug!(status, path = %request.path, "http: response");
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl AuthApi for RestClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.execute(endpoints::login(credentials)).await
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<AuthResponse, ApiError> {
        self.execute(endpoints::register(request)).await
    }
}
