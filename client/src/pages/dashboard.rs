//! Dashboard: headline counts and navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Room and staff counts come from public
//! endpoints; the guest count needs the token and goes through
//! `AuthContext::settle` so a stale token logs the user out.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashSet;

use hotel::endpoints;
use hotel::model::{Reservation, Room, Staff};
use hotel::policy::{self, Action};
use hotel::{ApiError, Session};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::execute;
use crate::state::session::AuthContext;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub rooms: usize,
    pub staff: usize,
    pub guests: usize,
}

/// Distinct guests, keyed by email.
pub fn unique_guest_count(reservations: &[Reservation]) -> usize {
    reservations.iter().map(|r| r.guest_email.as_str()).collect::<HashSet<_>>().len()
}

/// Greeting line for the header.
pub fn welcome_line(session: &Session) -> String {
    match session.user() {
        Some(user) => format!("Welcome, {} ({})", user.email, user.role),
        None => "Welcome back".to_owned(),
    }
}

async fn load_stats(auth: AuthContext) -> Result<DashboardStats, ApiError> {
    let rooms: Vec<Room> = execute(endpoints::all_rooms()).await?;
    let staff: Vec<Staff> = execute(endpoints::list_staff()).await?;
    let reservations: Vec<Reservation> = match auth.token() {
        Some(token) => auth.settle(&token, execute(endpoints::all_reservations(&token)).await)?,
        None => Vec::new(),
    };
    Ok(DashboardStats { rooms: rooms.len(), staff: staff.len(), guests: unique_guest_count(&reservations) })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let alive = Liveness::install();
    let stats = RwSignal::new(None::<DashboardStats>);
    let loading = RwSignal::new(true);

    spawn(async move {
        let result = load_stats(auth).await;
        if !alive.is_alive() {
            return;
        }
        stats.set(result.ok());
        loading.set(false);
    });

    let count = move |pick: fn(&DashboardStats) -> usize| {
        move || {
            if loading.get() {
                "...".to_owned()
            } else {
                stats.get().map_or_else(|| "-".to_owned(), |s| pick(&s).to_string())
            }
        }
    };
    let can_pay = move || policy::offers(auth.role(), Action::TakePayment);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Hotel Desk"</h1>
                <p class="dashboard-page__welcome">{move || auth.session.with(welcome_line)}</p>
            </header>
            <section class="dashboard-page__stats">
                <div class="stat"><span class="stat__value">{count(|s| s.rooms)}</span>" Rooms"</div>
                <div class="stat"><span class="stat__value">{count(|s| s.staff)}</span>" Staff"</div>
                <div class="stat"><span class="stat__value">{count(|s| s.guests)}</span>" Guests"</div>
            </section>
            <nav class="dashboard-page__nav">
                <A href="/inventory">"View Inventory"</A>
                <A href="/users">"User Management"</A>
                <A href="/book-room">"Book Room"</A>
                <A href="/reservations">"Reservations"</A>
                <Show when=can_pay>
                    <A href="/make-payment">"Make Payment"</A>
                </Show>
                <A href="/add-room">"Add Room"</A>
                <button class="btn dashboard-page__logout" on:click=move |_| auth.logout()>
                    "Sign Out"
                </button>
            </nav>
        </div>
    }
}
