//! Registration page. A successful registration also signs the user in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use hotel::{RegistrationRequest, Role};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notice::Notice;
use crate::state::session::AuthContext;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

/// Build a registration request from raw form values.
///
/// # Errors
///
/// A message for the form when a field is blank or the role is unknown.
pub fn validate_registration(email: &str, password: &str, role: &str) -> Result<RegistrationRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter an email and a password.");
    }
    let role: Role = role.parse().map_err(|_| "Choose a role.")?;
    Ok(RegistrationRequest { email: email.to_owned(), password: password.to_owned(), role })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let alive = Liveness::install();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Owner.as_str().to_owned());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        success.set(String::new());
        let request = match validate_registration(&email.get_untracked(), &password.get_untracked(), &role.get_untracked()) {
            Ok(r) => r,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);
        let alive = alive.clone();
        spawn(async move {
            let result = auth.register(request).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(()) => {
                    success.set("User registered successfully!".to_owned());
                    email.set(String::new());
                    password.set(String::new());
                    role.set(Role::Owner.as_str().to_owned());
                }
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email Address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="auth-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
                            .collect_view()}
                    </select>
                    <Notice error=error success=success/>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__link">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                    " or go to the "
                    <A href="/dashboard">"dashboard"</A>
                </p>
            </div>
        </div>
    }
}
