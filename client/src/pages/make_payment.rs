//! Take payment for a reservation.
//!
//! Serves `/make-payment` (reservation id typed in) and
//! `/make-payment/:reservationId` (id from the route, details load at once).

#[cfg(test)]
#[path = "make_payment_test.rs"]
mod make_payment_test;

use hotel::endpoints;
use hotel::model::{PaymentReceipt, ReservationDetails};
use hotel::policy::{self, Action};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api::execute;
use crate::state::session::AuthContext;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

/// Parse a positive reservation id from user input or a route segment.
///
/// # Errors
///
/// A message when `raw` is not a positive integer.
pub fn parse_reservation_id(raw: &str) -> Result<i64, &'static str> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err("Enter a valid reservation ID."),
    }
}

/// Confirmation line for a processed payment.
pub fn receipt_summary(receipt: &PaymentReceipt) -> String {
    match receipt.actor() {
        Some(actor) => format!("Payment processed by {actor}"),
        None => "Payment processed successfully!".to_owned(),
    }
}

#[component]
#[allow(clippy::too_many_lines)]
pub fn MakePaymentPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let params = use_params_map();
    let alive = Liveness::install();

    let route_id = move || params.with(|p| p.get("reservationId"));
    let reservation_input = RwSignal::new(String::new());
    let active_id = RwSignal::new(None::<i64>);
    let details = RwSignal::new(None::<ReservationDetails>);
    let receipt = RwSignal::new(None::<PaymentReceipt>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    let alive_fetch = alive.clone();
    let fetch_details = Callback::new(move |raw: String| {
        error.set(String::new());
        success.set(String::new());
        details.set(None);
        receipt.set(None);
        let id = match parse_reservation_id(&raw) {
            Ok(id) => id,
            Err(msg) => return error.set(msg.to_owned()),
        };
        let identity = match auth.identity() {
            Ok(identity) => identity,
            Err(msg) => return error.set(msg.to_owned()),
        };
        active_id.set(Some(id));
        busy.set(true);
        let alive = alive_fetch.clone();
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
            busy.set(false);
        });
    });

    Effect::new(move || {
        if let Some(raw) = route_id() {
            reservation_input.set(raw.clone());
            fetch_details.run(raw);
        }
    });

    let alive_pay = alive.clone();
    let pay = move |_: leptos::ev::MouseEvent| {
        let Some(id) = active_id.get_untracked() else { return };
        if busy.get_untracked() {
            return;
        }
        let identity = match auth.identity() {
            Ok(identity) => identity,
            Err(msg) => return error.set(msg.to_owned()),
        };
        error.set(String::new());
        success.set(String::new());
        busy.set(true);
        let alive = alive_pay.clone();
        spawn(async move {
            let call = endpoints::process_payment(id, &identity.token, &identity.email, identity.role);
            let result = auth.settle(&identity.token, execute::<PaymentReceipt>(call).await);
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(done) => {
                    success.set(receipt_summary(&done));
                    receipt.set(Some(done));
                }
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    let can_pay = move || policy::offers(auth.role(), Action::TakePayment);

    view! {
        <div class="payment-page">
            <PageHeader title="Make Payment"/>
            <Show when=move || route_id().is_none()>
                <form class="inline-form" on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    fetch_details.run(reservation_input.get_untracked());
                }>
                    <input type="number" placeholder="Enter Reservation ID"
                        prop:value=move || reservation_input.get()
                        on:input=move |ev| reservation_input.set(event_target_value(&ev))/>
                    <button class="btn" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Fetching..." } else { "Fetch Details" }}
                    </button>
                </form>
            </Show>
            <Notice error=error success=success/>
            {move || details.get().map(|d| view! {
                <dl class="details">
                    <dt>"Guest"</dt><dd>{d.guest_name.clone()}</dd>
                    <dt>"Room"</dt><dd>{d.room_number.clone()}</dd>
                    <dt>"Amount"</dt><dd>{format!("₹{:.2}", d.price)}</dd>
                </dl>
            })}
            <Show when=move || details.with(Option::is_some) && receipt.with(Option::is_none)>
                { let pay = pay.clone(); view! {
                <Show
                    when=can_pay
                    fallback=|| view! { <p class="notice">"Your role cannot take payments."</p> }
                >
                    <button class="btn" on:click=pay.clone() disabled=move || busy.get()>
                        {move || if busy.get() { "Processing..." } else { "Pay Now" }}
                    </button>
                </Show>
                } }
            </Show>
            {move || receipt.get().map(|r| view! {
                <dl class="details">
                    <dt>"Payment"</dt><dd>{r.payment_id.map(|id| format!("#{id}")).unwrap_or_default()}</dd>
                    <dt>"Amount"</dt><dd>{format!("₹{:.2}", r.amount)}</dd>
                    <dt>"Status"</dt><dd>{r.status.clone()}</dd>
                </dl>
            })}
        </div>
    }
}
