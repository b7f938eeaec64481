//! Priced details of one reservation (`/reservations/:reservationId`).

#[cfg(test)]
#[path = "reservation_details_test.rs"]
mod reservation_details_test;

use hotel::endpoints;
use hotel::model::ReservationDetails;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::page_header::PageHeader;
use crate::net::api::execute;
use crate::pages::make_payment::parse_reservation_id;
use crate::state::session::AuthContext;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

/// Check-in to check-out, or a placeholder when the backend omitted dates.
pub fn stay_label(details: &ReservationDetails) -> String {
    match (details.check_in_date.as_deref(), details.check_out_date.as_deref()) {
        (Some(from), Some(to)) => format!("{from} to {to}"),
        _ => "Dates unavailable".to_owned(),
    }
}

#[component]
pub fn ReservationDetailsPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let params = use_params_map();
    let alive = Liveness::install();

    let details = RwSignal::new(None::<ReservationDetails>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        let raw = params.with(|p| p.get("reservationId")).unwrap_or_default();
        let id = match parse_reservation_id(&raw) {
            Ok(id) => id,
            Err(msg) => {
                error.set(msg.to_owned());
                loading.set(false);
                return;
            }
        };
        let identity = match auth.identity() {
            Ok(identity) => identity,
            Err(msg) => {
                error.set(msg.to_owned());
                loading.set(false);
                return;
            }
        };
        loading.set(true);
        let alive = alive.clone();
        spawn(async move {
            let call = endpoints::reservation_details(id, &identity.token, identity.role);
            let result = auth.settle(&identity.token, execute::<ReservationDetails>(call).await);
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(found) => details.set(Some(found)),
                Err(_) => error.set("Failed to fetch reservation details".to_owned()),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="details-page">
            <PageHeader title="Reservation Details"/>
            <Show when=move || loading.get()>
                <p>"Loading..."</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="notice notice--error">{move || error.get()}</p>
            </Show>
            {move || details.get().filter(|_| !loading.get()).map(|d| view! {
                <dl class="details">
                    <dt>"Guest"</dt><dd>{d.guest_name.clone()}</dd>
                    <dt>"Email"</dt><dd>{d.guest_email.clone().unwrap_or_default()}</dd>
                    <dt>"Room"</dt><dd>{d.room_number.clone()}</dd>
                    <dt>"Stay"</dt><dd>{stay_label(&d)}</dd>
                    <dt>"Price"</dt><dd>{format!("₹{:.2}", d.price)}</dd>
                </dl>
            })}
        </div>
    }
}
