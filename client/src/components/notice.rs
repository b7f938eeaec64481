//! Inline error and success lines.

use leptos::prelude::*;

/// Shows `error` and `success` when non-empty. Pages own the signals and
/// clear them before each new request.
#[component]
pub fn Notice(error: RwSignal<String>, success: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !error.get().is_empty()>
            <p class="notice notice--error">{move || error.get()}</p>
        </Show>
        <Show when=move || !success.get().is_empty()>
            <p class="notice notice--success">{move || success.get()}</p>
        </Show>
    }
}
