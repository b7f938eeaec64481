use super::*;
use crate::model::{Role, User};

fn session(initialized: bool, token: Option<&str>, user: Option<User>) -> Session {
    Session { user, token: token.map(str::to_owned), initialized }
}

fn owner() -> User {
    User { id: Some(1), email: "o@hotel.test".into(), role: Role::Owner }
}

#[test]
fn uninitialized_is_pending_even_with_token() {
    assert_eq!(decide(&session(false, Some("t"), Some(owner()))), RouteDecision::Pending);
    assert_eq!(decide_for(RouteAccess::Public, &session(false, None, None)), RouteDecision::Pending);
}

#[test]
fn token_without_user_is_allowed() {
    assert_eq!(decide(&session(true, Some("abc123"), None)), RouteDecision::Allow);
}

#[test]
fn user_without_token_is_redirected() {
    assert_eq!(decide(&session(true, None, Some(owner()))), RouteDecision::Redirect(LOGIN_PATH));
}

#[test]
fn anonymous_redirects_to_login() {
    assert_eq!(decide(&session(true, None, None)), RouteDecision::Redirect("/login"));
}

#[test]
fn public_routes_allow_anonymous_once_initialized() {
    assert_eq!(decide_for(RouteAccess::Public, &session(true, None, None)), RouteDecision::Allow);
}
