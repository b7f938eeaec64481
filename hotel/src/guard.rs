//! Route guard decision.
//!
//! Pure function of the session so the router component and the CLI agree.
//! The guard only looks at the token; a rehydrated session without a user
//! record still passes.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::Session;

/// Where anonymous visitors are sent.
pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session not initialized yet: render a neutral placeholder.
    Pending,
    Allow,
    Redirect(&'static str),
}

/// Decision for a protected target.
#[must_use]
pub fn decide(session: &Session) -> RouteDecision {
    decide_for(RouteAccess::Protected, session)
}

#[must_use]
pub fn decide_for(access: RouteAccess, session: &Session) -> RouteDecision {
    if !session.initialized {
        return RouteDecision::Pending;
    }
    match access {
        RouteAccess::Public => RouteDecision::Allow,
        RouteAccess::Protected if session.token.is_some() => RouteDecision::Allow,
        RouteAccess::Protected => RouteDecision::Redirect(LOGIN_PATH),
    }
}
