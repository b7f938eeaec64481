//! Reservations list with guest search, details, payment and delete.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use hotel::endpoints;
use hotel::model::Reservation;
use hotel::policy::{self, Action};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api::{execute, execute_unit};
use crate::state::session::AuthContext;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

/// Reservations whose guest name or email contains `query`.
pub fn filter_reservations(all: &[Reservation], query: &str) -> Vec<Reservation> {
    all.iter().filter(|r| r.matches(query)).cloned().collect()
}

#[component]
pub fn ReservationsPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let alive = Liveness::install();

    let reservations = RwSignal::new(Vec::<Reservation>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let confirm_delete = RwSignal::new(None::<i64>);

    {
        let alive = alive.clone();
        spawn(async move {
            let Some(token) = auth.token() else { return };
            let result = auth.settle(&token, execute::<Vec<Reservation>>(endpoints::all_reservations(&token)).await);
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(list) => reservations.set(list),
                Err(_) => error.set("Failed to load reservations".to_owned()),
            }
            loading.set(false);
        });
    }

    let delete = Callback::new(move |id: i64| {
        let Some(token) = auth.token() else { return };
        error.set(String::new());
        success.set(String::new());
        let alive = alive.clone();
        spawn(async move {
            let result = auth.settle(&token, execute_unit(endpoints::delete_reservation(id, &token)).await);
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(()) => {
                    reservations.update(|list| list.retain(|r| r.id != id));
                    success.set("Reservation deleted successfully!".to_owned());
                }
                Err(_) => error.set("Failed to delete reservation".to_owned()),
            }
            confirm_delete.set(None);
        });
    });

    let visible = move || reservations.with(|all| filter_reservations(all, &search.get()));
    let can_pay = move || policy::offers(auth.role(), Action::TakePayment);

    view! {
        <div class="reservations-page">
            <PageHeader title="Reservations"/>
            <input
                class="search"
                type="text"
                placeholder="Search by guest name or email..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Notice error=error success=success/>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading reservations..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th><th>"Guest"</th><th>"Email"</th><th>"Room"</th>
                            <th>"Check-in"</th><th>"Check-out"</th><th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=visible key=|r| r.id let:r>
                            <tr>
                                <td>{r.id}</td>
                                <td>{r.guest_name.clone()}</td>
                                <td>{r.guest_email.clone()}</td>
                                <td>{r.room_id}</td>
                                <td>{r.check_in_date.clone()}</td>
                                <td>{r.check_out_date.clone()}</td>
                                <td>
                                    <A href=format!("/reservations/{}", r.id)>"Details"</A>
                                    <Show when=can_pay>
                                        <A href=format!("/make-payment/{}", r.id)>"Make Payment"</A>
                                    </Show>
                                    <button class="btn btn--small btn--danger" on:click=move |_| confirm_delete.set(Some(r.id))>
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </Show>
            <Show when=move || confirm_delete.get().is_some()>
                <div class="confirm">
                    <h3>"Confirm Delete"</h3>
                    <p>
                        {move || format!(
                            "Are you sure you want to delete reservation ID {}?",
                            confirm_delete.get().unwrap_or_default(),
                        )}
                    </p>
                    <button class="btn btn--danger" on:click=move |_| {
                        if let Some(id) = confirm_delete.get_untracked() { delete.run(id) }
                    }>"Delete"</button>
                    <button class="btn" on:click=move |_| confirm_delete.set(None)>"Cancel"</button>
                </div>
            </Show>
        </div>
    }
}
