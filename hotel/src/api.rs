//! Remote auth API seam.
//!
//! The manager only needs the two calls that mint a token. Each client
//! implements this over its own HTTP stack; tests script it.

use crate::error::ApiError;
use crate::model::{AuthResponse, Credentials, RegistrationRequest};

/// Backend calls that issue a session token.
///
/// Futures are not `Send`: the browser client runs on a single-threaded
/// executor and the CLI drives one request at a time.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/register`. A successful registration logs the caller in.
    async fn register(&self, request: &RegistrationRequest) -> Result<AuthResponse, ApiError>;
}
