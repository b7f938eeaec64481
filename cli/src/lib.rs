//! # hotel-cli
//!
//! Terminal client for the hotel backend. Each invocation rehydrates the
//! session from a JSON file, applies the same route guard the browser uses
//! before protected commands, and prints the backend's answer as pretty JSON.
//!
//! Identity is not persisted alongside the token, so commands that send role
//! or email hints take them from `--role`/`--email` when the session has no
//! user record (it only has one right after `login` or `register`).

pub mod args;
pub mod commands;
pub mod http;
pub mod store;

use std::path::PathBuf;

use hotel::{ApiConfig, ApiError, AuthSessionManager, ConfigError, StoreError};
use serde_json::Value;

pub use args::Cli;
pub use http::RestClient;
pub use store::FileStore;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("not logged in; run `hotel-cli login`")]
    NotLoggedIn,
    #[error("user identity unknown; pass --role/--email")]
    IdentityUnknown,
    #[error("no data directory found; pass --session-file or set HOTEL_SESSION_FILE")]
    NoSessionPath,
    #[error("{0}")]
    Invalid(String),
}

/// Run one parsed invocation and return what should be printed.
///
/// # Errors
///
/// Returns [`CliError`] for configuration problems, guard refusals and
/// backend failures. A 401 on a protected call has already cleared the
/// session file by the time the error comes back.
pub async fn run(cli: Cli) -> Result<Value, CliError> {
    let config = ApiConfig::from_value(cli.api_url.as_deref())?;
    let path = match cli.session_file {
        Some(path) => path,
        None => default_session_path().ok_or(CliError::NoSessionPath)?,
    };
    let api = RestClient::new(config)?;
    let mut manager = AuthSessionManager::new(api, FileStore::new(path));
    manager.initialize();

    let mut ctx = commands::Context::new(manager, cli.role, cli.email);
    commands::dispatch(&mut ctx, cli.command).await
}

/// `<platform data dir>/hotel-desk/session.json`.
#[must_use]
pub fn default_session_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.data_dir().join("hotel-desk").join("session.json"))
}
