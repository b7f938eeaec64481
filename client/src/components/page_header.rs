//! Page title bar with a link back to the dashboard.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PageHeader(title: &'static str) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            <A href="/dashboard" attr:class="page-header__back">"Back to Dashboard"</A>
        </header>
    }
}
