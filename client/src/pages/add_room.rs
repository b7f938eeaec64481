//! Add a room to the catalogue.

#[cfg(test)]
#[path = "add_room_test.rs"]
mod add_room_test;

use hotel::endpoints;
use hotel::model::{NewRoom, Room};
use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api::execute;
use crate::state::session::AuthContext;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

/// Room classes offered by the form.
pub const ROOM_TYPES: [&str; 4] = ["SINGLE", "DOUBLE", "SUITE", "DELUXE"];

/// Build a room from form values.
///
/// # Errors
///
/// A message when the number is blank or the price is not a non-negative
/// amount.
pub fn parse_room_form(number: &str, kind: &str, price: &str, available: bool) -> Result<NewRoom, &'static str> {
    let number = number.trim();
    if number.is_empty() {
        return Err("Room number is required.");
    }
    let price: f64 = price.trim().parse().map_err(|_| "Enter a price per night.")?;
    if !price.is_finite() || price < 0.0 {
        return Err("Price cannot be negative.");
    }
    Ok(NewRoom { room_number: number.to_owned(), kind: kind.to_owned(), price, available })
}

#[component]
pub fn AddRoomPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let alive = Liveness::install();

    let number = RwSignal::new(String::new());
    let kind = RwSignal::new(ROOM_TYPES[0].to_owned());
    let price = RwSignal::new(String::new());
    let available = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        let room = match parse_room_form(&number.get_untracked(), &kind.get_untracked(), &price.get_untracked(), available.get_untracked()) {
            Ok(room) => room,
            Err(msg) => return error.set(msg.to_owned()),
        };
        let Some(token) = auth.token() else { return };
        busy.set(true);
        let alive = alive.clone();
        spawn(async move {
            let result = auth.settle(&token, execute::<Room>(endpoints::add_room(&room, &token)).await);
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(_) => {
                    success.set("Room added successfully!".to_owned());
                    number.set(String::new());
                    kind.set(ROOM_TYPES[0].to_owned());
                    price.set(String::new());
                    available.set(true);
                }
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="add-room-page">
            <PageHeader title="Add Room"/>
            <form class="stacked-form" on:submit=on_submit>
                <input placeholder="Room Number" prop:value=move || number.get()
                    on:input=move |ev| number.set(event_target_value(&ev))/>
                <select prop:value=move || kind.get() on:change=move |ev| kind.set(event_target_value(&ev))>
                    {ROOM_TYPES.into_iter().map(|t| view! { <option value=t>{t}</option> }).collect_view()}
                </select>
                <input type="number" min="0" step="0.01" placeholder="Price per Night"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))/>
                <label>
                    <input type="checkbox" prop:checked=move || available.get()
                        on:change=move |ev| available.set(event_target_checked(&ev))/>
                    " Available"
                </label>
                <Notice error=error success=success/>
                <button class="btn" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Adding..." } else { "Add Room" }}
                </button>
            </form>
        </div>
    }
}
