//! Book a room: search availability for a date range, pick a room, enter
//! the guest and confirm.

#[cfg(test)]
#[path = "book_room_test.rs"]
mod book_room_test;

use hotel::endpoints;
use hotel::model::{BookingConfirmation, BookingRequest, Room, validate_stay};
use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api::execute;
use crate::state::session::AuthContext;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

/// Price label for a room card.
pub fn nightly_rate(price: f64) -> String {
    format!("₹{price:.2} / night")
}

/// Build a booking from the guest form.
///
/// # Errors
///
/// A message when guest details are blank or the stay is invalid.
pub fn booking_request(
    guest_name: &str,
    guest_email: &str,
    room_id: i64,
    check_in: &str,
    check_out: &str,
) -> Result<BookingRequest, &'static str> {
    let guest_name = guest_name.trim();
    let guest_email = guest_email.trim();
    if guest_name.is_empty() || guest_email.is_empty() {
        return Err("Enter the guest's name and email.");
    }
    validate_stay(check_in, check_out)?;
    Ok(BookingRequest {
        guest_name: guest_name.to_owned(),
        guest_email: guest_email.to_owned(),
        room_id,
        check_in_date: check_in.to_owned(),
        check_out_date: check_out.to_owned(),
    })
}

#[component]
#[allow(clippy::too_many_lines)]
pub fn BookRoomPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let alive = Liveness::install();

    let check_in = RwSignal::new(String::new());
    let check_out = RwSignal::new(String::new());
    let rooms = RwSignal::new(Vec::<Room>::new());
    let searching = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    let selected = RwSignal::new(None::<Room>);
    let guest_name = RwSignal::new(String::new());
    let guest_email = RwSignal::new(String::new());
    let booking = RwSignal::new(false);

    let alive_search = alive.clone();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        success.set(String::new());
        rooms.set(Vec::new());
        let (from, to) = (check_in.get_untracked(), check_out.get_untracked());
        if let Err(msg) = validate_stay(&from, &to) {
            error.set(msg.to_owned());
            return;
        }
        searching.set(true);
        let alive = alive_search.clone();
        spawn(async move {
            let result = execute::<Vec<Room>>(endpoints::available_rooms(&from, &to)).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(found) if found.is_empty() => error.set("No rooms available for selected dates.".to_owned()),
                Ok(found) => rooms.set(found),
                Err(_) => error.set("Failed to fetch rooms.".to_owned()),
            }
            searching.set(false);
        });
    };

    let open_booking = Callback::new(move |room: Room| {
        let email = auth.session.with_untracked(|s| s.email().map(ToOwned::to_owned)).unwrap_or_default();
        guest_name.set(email.clone());
        guest_email.set(email);
        selected.set(Some(room));
        error.set(String::new());
        success.set(String::new());
    });

    let alive_book = alive.clone();
    let on_book = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if booking.get_untracked() {
            return;
        }
        let Some(room) = selected.get_untracked() else { return };
        let identity = match auth.identity() {
            Ok(identity) => identity,
            Err(msg) => return error.set(msg.to_owned()),
        };
        let request = match booking_request(
            &guest_name.get_untracked(),
            &guest_email.get_untracked(),
            room.id,
            &check_in.get_untracked(),
            &check_out.get_untracked(),
        ) {
            Ok(request) => request,
            Err(msg) => return error.set(msg.to_owned()),
        };
        error.set(String::new());
        booking.set(true);
        let alive = alive_book.clone();
        spawn(async move {
            let call = endpoints::book_room(&request, &identity.token, &identity.email, identity.role);
            let result = auth.settle(&identity.token, execute::<BookingConfirmation>(call).await);
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(confirmation) => {
                    success.set(format!("Room booked successfully! Reservation #{}", confirmation.reservation_id));
                    selected.set(None);
                    rooms.set(Vec::new());
                    check_in.set(String::new());
                    check_out.set(String::new());
                }
                Err(e) => error.set(e.to_string()),
            }
            booking.set(false);
        });
    };

    view! {
        <div class="book-room-page">
            <PageHeader title="Book a Room"/>
            <form class="inline-form" on:submit=on_search>
                <input type="date" prop:value=move || check_in.get()
                    on:input=move |ev| check_in.set(event_target_value(&ev))/>
                <input type="date" prop:value=move || check_out.get()
                    min=move || check_in.get()
                    on:input=move |ev| check_out.set(event_target_value(&ev))/>
                <button class="btn" type="submit" disabled=move || searching.get()>
                    {move || if searching.get() { "Searching..." } else { "Search Rooms" }}
                </button>
            </form>
            <Notice error=error success=success/>
            <div class="room-grid">
                <For each=move || rooms.get() key=|room| room.id let:room>
                    {
                        let label = format!("Room {} ({})", room.room_number, room.kind);
                        let rate = nightly_rate(room.price);
                        view! {
                            <button class="room-card" on:click=move |_| open_booking.run(room.clone())>
                                <span class="room-card__title">{label}</span>
                                <span class="room-card__price">{rate}</span>
                            </button>
                        }
                    }
                </For>
            </div>
            <Show when=move || selected.with(Option::is_some)>
                <form class="modal" on:submit=on_book.clone()>
                    <h2>{move || selected.with(|r| r.as_ref().map(|r| format!("Book room {}", r.room_number)).unwrap_or_default())}</h2>
                    <input placeholder="Guest Name" prop:value=move || guest_name.get()
                        on:input=move |ev| guest_name.set(event_target_value(&ev))/>
                    <input type="email" placeholder="Guest Email" prop:value=move || guest_email.get()
                        on:input=move |ev| guest_email.set(event_target_value(&ev))/>
                    <button class="btn" type="submit" disabled=move || booking.get()>
                        {move || if booking.get() { "Booking..." } else { "Confirm Booking" }}
                    </button>
                    <button class="btn" type="button" on:click=move |_| selected.set(None)>"Cancel"</button>
                </form>
            </Show>
        </div>
    }
}
