//! Auth session state and the manager that drives it.
//!
//! DESIGN
//! ======
//! [`Session`] is a plain value with pure transitions so both the Leptos
//! context (a signal wrapping one `Session`) and the CLI ([`AuthSessionManager`]
//! owning one) run the same code. Store-aware variants (`*_in`) persist the
//! token alongside the in-memory change.
//!
//! TRUST MODEL
//! ===========
//! A rehydrated token is trusted until the backend rejects it. There is no
//! startup validation call; the first 401 on a protected request goes through
//! [`AuthSessionManager::handle_rejection`] (or [`Session::reject_in`]) and
//! forces a logout.
//!
//! LOGGING
//! =======
//! Tokens and passwords never reach a log event. Emails and roles do.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use tracing::{info, warn};

use crate::api::AuthApi;
use crate::error::ApiError;
use crate::guard::{self, RouteAccess, RouteDecision};
use crate::model::{AuthResponse, Credentials, RegistrationRequest, Role, User};
use crate::store::SessionStore;

/// Shown by views that need the user's role or email when only a token was
/// rehydrated.
pub const IDENTITY_UNKNOWN: &str = "Your profile is not loaded; sign in again to continue.";

/// Coarse lifecycle state derived from a [`Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// `initialize` has not run; consumers suspend rendering.
    Uninitialized,
    Anonymous,
    /// A token is held. The user record may still be absent.
    Authenticated,
}

/// Client-held authentication state.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub initialized: bool,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("initialized", &self.initialized)
            .finish()
    }
}

impl Session {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if !self.initialized {
            SessionPhase::Uninitialized
        } else if self.token.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    /// Apply a token read from the store. Runs once; later calls are ignored
    /// and return `false`. An empty stored value counts as no token.
    pub fn rehydrate(&mut self, stored: Option<String>) -> bool {
        if self.initialized {
            return false;
        }
        self.token = stored.filter(|t| !t.is_empty());
        self.user = None;
        self.initialized = true;
        true
    }

    /// Replace user and token with a successful auth response. No merging.
    pub fn establish(&mut self, response: AuthResponse) {
        self.token = Some(response.token);
        self.user = Some(response.user);
    }

    /// Drop user and token. `initialized` is kept.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Read the store and rehydrate. An unreadable store is logged and
    /// treated as empty so startup never blocks.
    pub fn initialize_from<S: SessionStore + ?Sized>(&mut self, store: &S) -> SessionPhase {
        if self.initialized {
            return self.phase();
        }
        let stored = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "session: token store unreadable; starting anonymous");
            None
        });
        self.rehydrate(stored);
        info!(authenticated = self.token.is_some(), "session: initialized");
        self.phase()
    }

    /// [`Session::establish`] and persist the token. A failed write is logged
    /// and does not undo the in-memory session.
    pub fn establish_in<S: SessionStore + ?Sized>(&mut self, store: &S, response: AuthResponse) {
        if let Err(e) = store.save(&response.token) {
            warn!(error = %e, "session: failed to persist token");
        }
        self.establish(response);
    }

    /// [`Session::clear`] and empty the store.
    pub fn clear_in<S: SessionStore + ?Sized>(&mut self, store: &S) {
        if let Err(e) = store.clear() {
            warn!(error = %e, "session: failed to clear persisted token");
        }
        self.clear();
        info!("session: logged out");
    }

    /// Force a logout when `error` says the backend rejected our token.
    /// Returns whether the session was cleared.
    pub fn reject_in<S: SessionStore + ?Sized>(&mut self, store: &S, error: &ApiError) -> bool {
        if !error.is_auth_failure() || self.token.is_none() {
            return false;
        }
        warn!("session: token rejected by backend; forcing logout");
        self.clear_in(store);
        true
    }

    /// [`Session::reject_in`] for a request sent with `sent_with`. A
    /// rejection of a token the session no longer holds (a later login
    /// replaced it) leaves the session alone.
    pub fn reject_sent_in<S: SessionStore + ?Sized>(&mut self, store: &S, sent_with: &str, error: &ApiError) -> bool {
        if self.token.as_deref() != Some(sent_with) {
            return false;
        }
        self.reject_in(store, error)
    }
}

/// Call the login endpoint and log the outcome.
///
/// # Errors
///
/// Returns the API error unchanged.
pub async fn request_login<A: AuthApi + ?Sized>(api: &A, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    match api.login(credentials).await {
        Ok(response) => {
            info!(email = %response.user.email, role = %response.user.role, "session: login succeeded");
            Ok(response)
        }
        Err(e) => {
            warn!(email = %credentials.email, error = %e, "session: login failed");
            Err(e)
        }
    }
}

/// Call the registration endpoint and log the outcome.
///
/// # Errors
///
/// Returns the API error unchanged.
pub async fn request_registration<A: AuthApi + ?Sized>(
    api: &A,
    request: &RegistrationRequest,
) -> Result<AuthResponse, ApiError> {
    match api.register(request).await {
        Ok(response) => {
            info!(email = %response.user.email, role = %response.user.role, "session: registered");
            Ok(response)
        }
        Err(e) => {
            warn!(email = %request.email, error = %e, "session: registration failed");
            Err(e)
        }
    }
}

/// Owns one [`Session`] and the collaborators that change it.
pub struct AuthSessionManager<A, S> {
    api: A,
    store: S,
    session: Session,
}

impl<A: AuthApi, S: SessionStore> AuthSessionManager<A, S> {
    #[must_use]
    pub fn new(api: A, store: S) -> Self {
        Self { api, store, session: Session::default() }
    }

    /// Rehydrate from the store. Only the first call has an effect.
    pub fn initialize(&mut self) -> SessionPhase {
        self.session.initialize_from(&self.store)
    }

    /// Log in and persist the returned token.
    ///
    /// # Errors
    ///
    /// Propagates the API error unchanged; the session is left as it was.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<&Session, ApiError> {
        let response = request_login(&self.api, credentials).await?;
        self.session.establish_in(&self.store, response);
        Ok(&self.session)
    }

    /// Register a new account, which also logs it in.
    ///
    /// # Errors
    ///
    /// Propagates the API error unchanged; the session is left as it was.
    pub async fn register(&mut self, request: &RegistrationRequest) -> Result<&Session, ApiError> {
        let response = request_registration(&self.api, request).await?;
        self.session.establish_in(&self.store, response);
        Ok(&self.session)
    }

    /// Clear the session and the store. No network call. Idempotent.
    pub fn logout(&mut self) {
        self.session.clear_in(&self.store);
    }

    /// Feed back the outcome of a protected request. A 401 forces logout.
    pub fn handle_rejection(&mut self, error: &ApiError) -> bool {
        self.session.reject_in(&self.store, error)
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Route guard decision for a target with the given access level.
    #[must_use]
    pub fn decide(&self, access: RouteAccess) -> RouteDecision {
        guard::decide_for(access, &self.session)
    }
}
