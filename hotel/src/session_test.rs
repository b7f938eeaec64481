use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use super::*;
use crate::error::StoreError;
use crate::store::MemoryStore;

/// Auth API that replays queued outcomes in order.
#[derive(Default)]
struct ScriptedApi {
    outcomes: RefCell<VecDeque<Result<AuthResponse, ApiError>>>,
    calls: Cell<usize>,
}

impl ScriptedApi {
    fn then(self, outcome: Result<AuthResponse, ApiError>) -> Self {
        self.outcomes.borrow_mut().push_back(outcome);
        self
    }

    fn next(&self) -> Result<AuthResponse, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted outcome".into())))
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for ScriptedApi {
    async fn login(&self, _credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.next()
    }

    async fn register(&self, _request: &RegistrationRequest) -> Result<AuthResponse, ApiError> {
        self.next()
    }
}

/// Store whose writes always fail.
struct ReadOnlyStore;

impl SessionStore for ReadOnlyStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn save(&self, _token: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("quota exceeded".into()))
    }

    fn clear(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("quota exceeded".into()))
    }
}

/// Store whose reads always fail.
struct BrokenStore;

impl SessionStore for BrokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("no window".into()))
    }

    fn save(&self, _token: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

fn auth(token: &str, email: &str, role: Role) -> AuthResponse {
    AuthResponse { token: token.into(), user: User { id: None, email: email.into(), role } }
}

fn creds() -> Credentials {
    Credentials { email: "a@b.com".into(), password: "x".into() }
}

fn manager(api: ScriptedApi, store: MemoryStore) -> AuthSessionManager<ScriptedApi, MemoryStore> {
    let mut m = AuthSessionManager::new(api, store);
    m.initialize();
    m
}

// =============================================================================
// initialize
// =============================================================================

#[test]
fn initialize_without_stored_token_is_anonymous() {
    let mut m = AuthSessionManager::new(ScriptedApi::default(), MemoryStore::default());
    assert_eq!(m.session().phase(), SessionPhase::Uninitialized);
    assert_eq!(m.initialize(), SessionPhase::Anonymous);
    assert!(m.session().initialized);
}

#[test]
fn initialize_rehydrates_token_without_user() {
    let mut m = AuthSessionManager::new(ScriptedApi::default(), MemoryStore::with_token("abc123"));
    assert_eq!(m.initialize(), SessionPhase::Authenticated);
    assert_eq!(m.session().token(), Some("abc123"));
    assert_eq!(m.session().user(), None);
}

#[test]
fn initialize_runs_once() {
    let store = MemoryStore::default();
    let mut m = AuthSessionManager::new(ScriptedApi::default(), store.clone());
    m.initialize();
    store.save("late").unwrap();
    assert_eq!(m.initialize(), SessionPhase::Anonymous);
    assert_eq!(m.session().token(), None);
}

#[test]
fn empty_stored_token_counts_as_absent() {
    let mut m = AuthSessionManager::new(ScriptedApi::default(), MemoryStore::with_token(""));
    assert_eq!(m.initialize(), SessionPhase::Anonymous);
}

#[test]
fn whitespace_stored_token_is_kept_verbatim() {
    let mut m = AuthSessionManager::new(ScriptedApi::default(), MemoryStore::with_token(" "));
    assert_eq!(m.initialize(), SessionPhase::Authenticated);
    assert_eq!(m.session().token(), Some(" "));
}

#[test]
fn unreadable_store_still_initializes() {
    let mut m = AuthSessionManager::new(ScriptedApi::default(), BrokenStore);
    assert_eq!(m.initialize(), SessionPhase::Anonymous);
    assert!(m.session().initialized);
}

// =============================================================================
// login / register
// =============================================================================

#[tokio::test]
async fn login_sets_session_and_persists_token() {
    let store = MemoryStore::default();
    let api = ScriptedApi::default().then(Ok(auth("t1", "a@b.com", Role::Owner)));
    let mut m = manager(api, store.clone());

    let session = m.login(&creds()).await.unwrap();
    assert_eq!(session.token(), Some("t1"));
    assert_eq!(session.email(), Some("a@b.com"));
    assert_eq!(session.role(), Some(Role::Owner));
    assert_eq!(store.peek().as_deref(), Some("t1"));
}

#[tokio::test]
async fn rejected_login_leaves_session_untouched() {
    let store = MemoryStore::with_token("old");
    let api = ScriptedApi::default().then(Err(ApiError::from_status(
        401,
        r#"{"message":"Invalid credentials"}"#,
        "Login failed",
    )));
    let mut m = manager(api, store.clone());
    let before = m.session().clone();

    let err = m.login(&creds()).await.unwrap_err();
    assert!(err.to_string().contains("Invalid credentials"));
    assert_eq!(m.session(), &before);
    assert_eq!(store.peek().as_deref(), Some("old"));
}

#[tokio::test]
async fn second_login_replaces_first() {
    let store = MemoryStore::default();
    let api = ScriptedApi::default()
        .then(Ok(auth("t1", "a@b.com", Role::Owner)))
        .then(Ok(auth("t2", "c@d.com", Role::Receptionist)));
    let mut m = manager(api, store.clone());

    m.login(&creds()).await.unwrap();
    m.login(&creds()).await.unwrap();
    assert_eq!(m.session().token(), Some("t2"));
    assert_eq!(m.session().email(), Some("c@d.com"));
    assert_eq!(m.session().role(), Some(Role::Receptionist));
    assert_eq!(store.peek().as_deref(), Some("t2"));
    assert_eq!(m.api().calls.get(), 2);
}

#[tokio::test]
async fn register_logs_the_caller_in() {
    let store = MemoryStore::default();
    let api = ScriptedApi::default().then(Ok(auth("r1", "new@hotel.test", Role::Manager)));
    let mut m = manager(api, store.clone());
    let request = RegistrationRequest {
        email: "new@hotel.test".into(),
        password: "pw".into(),
        role: Role::Manager,
    };

    m.register(&request).await.unwrap();
    assert_eq!(m.session().phase(), SessionPhase::Authenticated);
    assert_eq!(store.peek().as_deref(), Some("r1"));
}

#[tokio::test]
async fn failed_register_surfaces_backend_error() {
    let api = ScriptedApi::default().then(Err(ApiError::from_status(
        400,
        r#"{"error":"Email already in use"}"#,
        "Registration failed",
    )));
    let mut m = manager(api, MemoryStore::default());
    let request = RegistrationRequest { email: "dup@hotel.test".into(), password: "pw".into(), role: Role::Owner };

    let err = m.register(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "Email already in use");
    assert_eq!(m.session().phase(), SessionPhase::Anonymous);
}

#[tokio::test]
async fn store_write_failure_keeps_in_memory_session() {
    let api = ScriptedApi::default().then(Ok(auth("t1", "a@b.com", Role::Owner)));
    let mut m = AuthSessionManager::new(api, ReadOnlyStore);
    m.initialize();

    m.login(&creds()).await.unwrap();
    assert_eq!(m.session().token(), Some("t1"));
}

// =============================================================================
// logout / rejection
// =============================================================================

#[tokio::test]
async fn logout_clears_session_and_store() {
    let store = MemoryStore::default();
    let api = ScriptedApi::default().then(Ok(auth("t1", "a@b.com", Role::Owner)));
    let mut m = manager(api, store.clone());
    m.login(&creds()).await.unwrap();

    m.logout();
    assert_eq!(m.session().token(), None);
    assert_eq!(m.session().user(), None);
    assert!(m.session().initialized);
    assert_eq!(store.peek(), None);
}

#[test]
fn logout_is_idempotent() {
    let store = MemoryStore::with_token("abc123");
    let mut m = manager(ScriptedApi::default(), store.clone());
    m.logout();
    m.logout();
    assert_eq!(m.session().phase(), SessionPhase::Anonymous);
    assert_eq!(store.peek(), None);
}

#[test]
fn unauthorized_forces_logout() {
    let store = MemoryStore::with_token("stale");
    let mut m = manager(ScriptedApi::default(), store.clone());
    let err = ApiError::from_status(401, "", "Failed to load reservations");

    assert!(m.handle_rejection(&err));
    assert_eq!(m.session().phase(), SessionPhase::Anonymous);
    assert_eq!(store.peek(), None);
}

#[test]
fn forbidden_and_network_errors_keep_session() {
    let store = MemoryStore::with_token("abc123");
    let mut m = manager(ScriptedApi::default(), store.clone());

    assert!(!m.handle_rejection(&ApiError::from_status(403, "", "Denied")));
    assert!(!m.handle_rejection(&ApiError::Network("offline".into())));
    assert_eq!(m.session().token(), Some("abc123"));
    assert_eq!(store.peek().as_deref(), Some("abc123"));
}

#[test]
fn late_rejection_of_replaced_token_keeps_newer_session() {
    let store = MemoryStore::default();
    let mut session = Session::default();
    session.initialize_from(&store);
    session.establish_in(&store, auth("old", "a@b.com", Role::Owner));
    session.establish_in(&store, auth("new", "a@b.com", Role::Manager));
    let err = ApiError::from_status(401, "", "Failed to load reservations");

    assert!(!session.reject_sent_in(&store, "old", &err));
    assert_eq!(session.token(), Some("new"));
    assert_eq!(store.peek().as_deref(), Some("new"));

    assert!(session.reject_sent_in(&store, "new", &err));
    assert_eq!(session.phase(), SessionPhase::Anonymous);
    assert_eq!(store.peek(), None);
}

#[test]
fn guard_follows_session_phase() {
    let mut m = AuthSessionManager::new(ScriptedApi::default(), MemoryStore::with_token("abc123"));
    assert_eq!(m.decide(RouteAccess::Protected), RouteDecision::Pending);
    m.initialize();
    assert_eq!(m.decide(RouteAccess::Protected), RouteDecision::Allow);
    m.logout();
    assert_eq!(m.decide(RouteAccess::Protected), RouteDecision::Redirect(guard::LOGIN_PATH));
}

#[test]
fn debug_output_redacts_token() {
    let session = Session { user: None, token: Some("secret-token".into()), initialized: true };
    assert!(!format!("{session:?}").contains("secret-token"));
}
