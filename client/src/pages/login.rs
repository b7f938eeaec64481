//! Login page: email and password against `POST /auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use hotel::Credentials;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::AuthContext;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

/// Trim the email and require both fields.
///
/// # Errors
///
/// A message for the form when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let alive = Liveness::install();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let signed_in = RwSignal::new(false);

    Effect::new(move || {
        if signed_in.get() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(c) => c,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);
        let alive = alive.clone();
        spawn(async move {
            let result = auth.login(credentials).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(()) => {
                    email.set(String::new());
                    password.set(String::new());
                    signed_in.set(true);
                }
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Hotel Desk"</h1>
                <p class="auth-card__subtitle">"Sign in to continue"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email Address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="auth-input-row">
                        <input
                            class="auth-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="auth-input-row__toggle"
                            type="button"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <Show when=move || !error.get().is_empty()>
                        <p class="notice notice--error">{move || error.get()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__link">
                    "No account? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
