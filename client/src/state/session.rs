//! Auth session context for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionProvider`] sits at the application root. It creates the single
//! [`AuthContext`], rehydrates it from `localStorage` before anything else
//! renders, and hides its children until that has happened. Pages reach the
//! session through `expect_context::<AuthContext>()`.
//!
//! The transitions are `hotel::Session`'s own, so the browser and the CLI
//! cannot drift apart.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use hotel::session::{request_login, request_registration};
use hotel::{ApiError, Credentials, IDENTITY_UNKNOWN, RegistrationRequest, Role, Session};
use leptos::prelude::*;

use crate::net::api::BrowserAuthApi;
use crate::util::storage::BrowserStore;

/// Handle to the process-wide session signal. Cheap to copy into closures.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub session: RwSignal<Session>,
}

/// Email and role of the signed-in user, needed for actor headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub token: String,
    pub email: String,
    pub role: Role,
}

impl AuthContext {
    pub fn new() -> Self {
        Self { session: RwSignal::new(Session::default()) }
    }

    /// Rehydrate from `localStorage`. Only the first call has an effect.
    pub fn initialize(self) {
        self.session.update(|s| {
            s.initialize_from(&BrowserStore);
        });
    }

    /// Log in and persist the token.
    ///
    /// # Errors
    ///
    /// The API error, unchanged; the session is not touched.
    pub async fn login(self, credentials: Credentials) -> Result<(), ApiError> {
        let response = request_login(&BrowserAuthApi, &credentials).await?;
        self.session.update(|s| s.establish_in(&BrowserStore, response));
        Ok(())
    }

    /// Register, which also logs the new account in.
    ///
    /// # Errors
    ///
    /// The API error, unchanged; the session is not touched.
    pub async fn register(self, request: RegistrationRequest) -> Result<(), ApiError> {
        let response = request_registration(&BrowserAuthApi, &request).await?;
        self.session.update(|s| s.establish_in(&BrowserStore, response));
        Ok(())
    }

    pub fn logout(self) {
        self.session.update(|s| s.clear_in(&BrowserStore));
    }

    /// Pass a protected call's result through; a 401 forces logout, which
    /// in turn makes the route guard redirect to the login page. Only a
    /// rejection of the token still in use counts: a late 401 for a token
    /// replaced by a newer login is ignored.
    pub fn settle<T>(self, sent_with: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(err) = &result {
            let current_rejected = self
                .session
                .with_untracked(|s| s.token.as_deref() == Some(sent_with) && err.is_auth_failure());
            if current_rejected {
                self.session.update(|s| {
                    s.reject_sent_in(&BrowserStore, sent_with, err);
                });
            }
        }
        result
    }

    /// Current token, without tracking.
    pub fn token(self) -> Option<String> {
        self.session.with_untracked(|s| s.token.clone())
    }

    pub fn role(self) -> Option<Role> {
        self.session.with(Session::role)
    }

    /// Token plus the user's email and role, or the message to show when the
    /// profile is missing (rehydrated sessions carry no user record).
    ///
    /// # Errors
    ///
    /// `IDENTITY_UNKNOWN` when either half is missing.
    pub fn identity(self) -> Result<Identity, &'static str> {
        self.session.with_untracked(identity_of)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn identity_of(session: &Session) -> Result<Identity, &'static str> {
    match (session.token.as_ref(), session.user.as_ref()) {
        (Some(token), Some(user)) => Ok(Identity {
            token: token.clone(),
            email: user.email.clone(),
            role: user.role,
        }),
        _ => Err(IDENTITY_UNKNOWN),
    }
}

/// Root provider. Children render only once the session is initialized.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let auth = AuthContext::new();
    auth.initialize();
    provide_context(auth);

    view! {
        <Show
            when=move || auth.session.with(|s| s.initialized)
            fallback=|| view! { <p class="session-loading">"Loading..."</p> }
        >
            {children()}
        </Show>
    }
}
