//! Route guard component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route. The decision itself is
//! `hotel::guard::decide`; this module only maps it onto rendering and a
//! replace-navigation to the login page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use hotel::guard::{self, RouteDecision};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::AuthContext;

/// Text shown while a protected view is withheld.
pub fn placeholder_text(decision: RouteDecision) -> &'static str {
    match decision {
        RouteDecision::Pending => "Loading...",
        RouteDecision::Redirect(_) => "Redirecting to login...",
        RouteDecision::Allow => "",
    }
}

/// Render `children` only while the session holds a token.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let decision = Memo::new(move |_| auth.session.with(guard::decide));
    let navigate = use_navigate();

    Effect::new(move || {
        if let RouteDecision::Redirect(path) = decision.get() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == RouteDecision::Allow
            fallback=move || view! { <p class="route-placeholder">{move || placeholder_text(decision.get())}</p> }
        >
            {children()}
        </Show>
    }
}
