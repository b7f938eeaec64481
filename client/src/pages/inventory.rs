//! Inventory page: stock items and staff roster.
//!
//! Lists load from public endpoints. Add, edit and delete controls appear
//! only when the advisory policy allows them for the signed-in role (items:
//! OWNER or MANAGER, staff: OWNER). The backend still has the last word.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use hotel::endpoints;
use hotel::model::{InventoryItem, Staff};
use hotel::policy::{self, Action};
use hotel::ApiError;
use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api::{execute, execute_unit};
use crate::state::session::AuthContext;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

/// Duties offered by the staff form.
pub const STAFF_DUTIES: [&str; 5] = ["HOUSEKEEPER", "CHEF", "RECEPTION", "MAINTENANCE", "SECURITY"];

/// Build an item from form values.
///
/// # Errors
///
/// A message when the name is blank or the quantity is not a whole number of
/// at least one.
pub fn parse_item_form(name: &str, quantity: &str, category: &str) -> Result<InventoryItem, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Item name is required.");
    }
    let quantity: i32 = quantity.trim().parse().map_err(|_| "Quantity must be a whole number.")?;
    if quantity < 1 {
        return Err("Quantity must be at least 1.");
    }
    Ok(InventoryItem { id: None, name: name.to_owned(), quantity, category: category.trim().to_owned() })
}

/// Build a staff record from form values.
///
/// # Errors
///
/// A message when the name or duty is blank.
pub fn parse_staff_form(name: &str, duty: &str, on_duty: bool) -> Result<Staff, &'static str> {
    let name = name.trim();
    let duty = duty.trim();
    if name.is_empty() || duty.is_empty() {
        return Err("Staff name and role are required.");
    }
    Ok(Staff { id: None, name: name.to_owned(), role: duty.to_ascii_uppercase(), on_duty })
}

/// Swap in an updated item by id, or append it when new.
pub fn upsert_item(items: &mut Vec<InventoryItem>, updated: InventoryItem) {
    match items.iter_mut().find(|i| i.id.is_some() && i.id == updated.id) {
        Some(slot) => *slot = updated,
        None => items.push(updated),
    }
}

/// Swap in an updated staff member by id, or append when new.
pub fn upsert_staff(staff: &mut Vec<Staff>, updated: Staff) {
    match staff.iter_mut().find(|s| s.id.is_some() && s.id == updated.id) {
        Some(slot) => *slot = updated,
        None => staff.push(updated),
    }
}

async fn load(items: RwSignal<Vec<InventoryItem>>, staff: RwSignal<Vec<Staff>>) -> Result<(), ApiError> {
    let loaded_items: Vec<InventoryItem> = execute(endpoints::list_items()).await?;
    let loaded_staff: Vec<Staff> = execute(endpoints::list_staff()).await?;
    items.set(loaded_items);
    staff.set(loaded_staff);
    Ok(())
}

#[component]
#[allow(clippy::too_many_lines)]
pub fn InventoryPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let alive = Liveness::install();

    let items = RwSignal::new(Vec::<InventoryItem>::new());
    let staff = RwSignal::new(Vec::<Staff>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    // Item form: `editing_item` is the id under edit, `None` when adding.
    let show_item_form = RwSignal::new(false);
    let editing_item = RwSignal::new(None::<i64>);
    let item_name = RwSignal::new(String::new());
    let item_qty = RwSignal::new("1".to_owned());
    let item_cat = RwSignal::new(String::new());
    let confirm_item = RwSignal::new(None::<i64>);

    let show_staff_form = RwSignal::new(false);
    let editing_staff = RwSignal::new(None::<i64>);
    let staff_name = RwSignal::new(String::new());
    let staff_duty = RwSignal::new(STAFF_DUTIES[0].to_owned());
    let staff_on_duty = RwSignal::new(true);
    let confirm_staff = RwSignal::new(None::<i64>);

    let busy = RwSignal::new(false);

    {
        let alive = alive.clone();
        spawn(async move {
            let result = load(items, staff).await;
            if !alive.is_alive() {
                return;
            }
            if result.is_err() {
                error.set("Failed to load inventory or staff".to_owned());
            }
            loading.set(false);
        });
    }

    let can_manage_items = move || policy::offers(auth.role(), Action::ManageInventory);
    let can_manage_staff = move || policy::offers(auth.role(), Action::ManageStaff);

    let reset_item_form = move || {
        show_item_form.set(false);
        editing_item.set(None);
        item_name.set(String::new());
        item_qty.set("1".to_owned());
        item_cat.set(String::new());
    };
    let reset_staff_form = move || {
        show_staff_form.set(false);
        editing_staff.set(None);
        staff_name.set(String::new());
        staff_duty.set(STAFF_DUTIES[0].to_owned());
        staff_on_duty.set(true);
    };

    let start_item_edit = Callback::new(move |item: InventoryItem| {
        editing_item.set(item.id);
        item_name.set(item.name);
        item_qty.set(item.quantity.to_string());
        item_cat.set(item.category);
        show_item_form.set(true);
    });
    let start_staff_edit = Callback::new(move |member: Staff| {
        editing_staff.set(member.id);
        staff_name.set(member.name);
        staff_duty.set(member.role);
        staff_on_duty.set(member.on_duty);
        show_staff_form.set(true);
    });

    let alive_item = alive.clone();
    let on_item_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        let item = match parse_item_form(&item_name.get_untracked(), &item_qty.get_untracked(), &item_cat.get_untracked()) {
            Ok(item) => item,
            Err(msg) => return error.set(msg.to_owned()),
        };
        let identity = match auth.identity() {
            Ok(identity) => identity,
            Err(msg) => return error.set(msg.to_owned()),
        };
        let target = editing_item.get_untracked();
        busy.set(true);
        let alive = alive_item.clone();
        spawn(async move {
            let request = match target {
                Some(id) => endpoints::update_item(id, &item, &identity.token, identity.role),
                None => endpoints::add_item(&item, &identity.token, identity.role),
            };
            let result = auth.settle(&identity.token, execute::<InventoryItem>(request).await);
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(saved) => {
                    items.update(|list| upsert_item(list, saved));
                    success.set(if target.is_some() { "Item updated successfully!" } else { "Item added successfully!" }.to_owned());
                    reset_item_form();
                }
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    let alive_staff = alive.clone();
    let on_staff_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        let member = match parse_staff_form(&staff_name.get_untracked(), &staff_duty.get_untracked(), staff_on_duty.get_untracked()) {
            Ok(member) => member,
            Err(msg) => return error.set(msg.to_owned()),
        };
        let identity = match auth.identity() {
            Ok(identity) => identity,
            Err(msg) => return error.set(msg.to_owned()),
        };
        let target = editing_staff.get_untracked();
        busy.set(true);
        let alive = alive_staff.clone();
        spawn(async move {
            let request = match target {
                Some(id) => endpoints::update_staff(id, &member, &identity.token, identity.role),
                None => endpoints::add_staff(&member, &identity.token, identity.role),
            };
            let result = auth.settle(&identity.token, execute::<Staff>(request).await);
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(saved) => {
                    staff.update(|list| upsert_staff(list, saved));
                    success.set(if target.is_some() { "Staff updated successfully!" } else { "Staff added successfully!" }.to_owned());
                    reset_staff_form();
                }
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    let delete_item = Callback::new(move |id: i64| {
        let identity = match auth.identity() {
            Ok(identity) => identity,
            Err(msg) => return error.set(msg.to_owned()),
        };
        error.set(String::new());
        success.set(String::new());
        spawn(async move {
            match auth.settle(&identity.token, execute_unit(endpoints::delete_item(id, &identity.token, identity.role)).await) {
                Ok(()) => {
                    items.update(|list| list.retain(|i| i.id != Some(id)));
                    success.set("Item deleted successfully!".to_owned());
                }
                Err(e) => error.set(e.to_string()),
            }
            confirm_item.set(None);
        });
    });

    let delete_staff = Callback::new(move |id: i64| {
        let identity = match auth.identity() {
            Ok(identity) => identity,
            Err(msg) => return error.set(msg.to_owned()),
        };
        error.set(String::new());
        success.set(String::new());
        spawn(async move {
            match auth.settle(&identity.token, execute_unit(endpoints::delete_staff(id, &identity.token, identity.role)).await) {
                Ok(()) => {
                    staff.update(|list| list.retain(|s| s.id != Some(id)));
                    success.set("Staff deleted successfully!".to_owned());
                }
                Err(e) => error.set(e.to_string()),
            }
            confirm_staff.set(None);
        });
    });

    view! {
        <div class="inventory-page">
            <PageHeader title="Inventory & Staff"/>
            <Notice error=error success=success/>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading inventory data..."</p> }>
                <section class="inventory-page__section">
                    <div class="section-header">
                        <h2>"Items"</h2>
                        <Show when=can_manage_items>
                            <button class="btn" on:click=move |_| {
                                if show_item_form.get_untracked() { reset_item_form() } else { show_item_form.set(true) }
                            }>
                                {move || if show_item_form.get() { "Cancel" } else { "+ Add Item" }}
                            </button>
                        </Show>
                    </div>
                    <Show when=move || items.with(Vec::is_empty)>
                        <p class="empty">"No items in inventory."</p>
                    </Show>
                    <ul class="card-list">
                        <For each=move || items.get() key=|item| item.id let:item>
                            <li class="card">
                                <span class="card__title">{item.name.clone()}</span>
                                <span class="card__meta">{format!("Qty: {} | {}", item.quantity, item.category)}</span>
                                <Show when=can_manage_items>
                                    {
                                        let item = item.clone();
                                        let id = item.id;
                                        view! {
                                            <button class="btn btn--small" on:click={
                                                let item = item.clone();
                                                move |_| start_item_edit.run(item.clone())
                                            }>"Edit"</button>
                                            <button class="btn btn--small btn--danger" on:click=move |_| confirm_item.set(id)>
                                                "Delete"
                                            </button>
                                        }
                                    }
                                </Show>
                            </li>
                        </For>
                    </ul>
                    <Show when=move || confirm_item.get().is_some()>
                        <div class="confirm">
                            <p>{move || format!("Delete item {}?", confirm_item.get().unwrap_or_default())}</p>
                            <button class="btn btn--danger" on:click=move |_| {
                                if let Some(id) = confirm_item.get_untracked() { delete_item.run(id) }
                            }>"Delete"</button>
                            <button class="btn" on:click=move |_| confirm_item.set(None)>"Cancel"</button>
                        </div>
                    </Show>
                    { let on_item_submit = on_item_submit.clone(); view! {
                    <Show when=move || show_item_form.get()>
                        <form class="inline-form" on:submit=on_item_submit.clone()>
                            <input placeholder="Item Name" prop:value=move || item_name.get()
                                on:input=move |ev| item_name.set(event_target_value(&ev))/>
                            <input type="number" min="1" prop:value=move || item_qty.get()
                                on:input=move |ev| item_qty.set(event_target_value(&ev))/>
                            <input placeholder="Category" prop:value=move || item_cat.get()
                                on:input=move |ev| item_cat.set(event_target_value(&ev))/>
                            <button class="btn" type="submit" disabled=move || busy.get()>
                                {move || if editing_item.get().is_some() { "Save Item" } else { "Add Item" }}
                            </button>
                        </form>
                    </Show>
                    } }
                </section>

                <section class="inventory-page__section">
                    <div class="section-header">
                        <h2>"Staff"</h2>
                        <Show when=can_manage_staff>
                            <button class="btn" on:click=move |_| {
                                if show_staff_form.get_untracked() { reset_staff_form() } else { show_staff_form.set(true) }
                            }>
                                {move || if show_staff_form.get() { "Cancel" } else { "+ Add Staff" }}
                            </button>
                        </Show>
                    </div>
                    <Show when=move || staff.with(Vec::is_empty)>
                        <p class="empty">"No staff members."</p>
                    </Show>
                    <ul class="card-list">
                        <For each=move || staff.get() key=|member| member.id let:member>
                            <li class="card">
                                <span class="card__title">{member.name.clone()}</span>
                                <span class="card__meta">
                                    {format!("{} | {}", member.role, if member.on_duty { "On duty" } else { "Off duty" })}
                                </span>
                                <Show when=can_manage_staff>
                                    {
                                        let member = member.clone();
                                        let id = member.id;
                                        view! {
                                            <button class="btn btn--small" on:click={
                                                let member = member.clone();
                                                move |_| start_staff_edit.run(member.clone())
                                            }>"Edit"</button>
                                            <button class="btn btn--small btn--danger" on:click=move |_| confirm_staff.set(id)>
                                                "Delete"
                                            </button>
                                        }
                                    }
                                </Show>
                            </li>
                        </For>
                    </ul>
                    <Show when=move || confirm_staff.get().is_some()>
                        <div class="confirm">
                            <p>{move || format!("Delete staff member {}?", confirm_staff.get().unwrap_or_default())}</p>
                            <button class="btn btn--danger" on:click=move |_| {
                                if let Some(id) = confirm_staff.get_untracked() { delete_staff.run(id) }
                            }>"Delete"</button>
                            <button class="btn" on:click=move |_| confirm_staff.set(None)>"Cancel"</button>
                        </div>
                    </Show>
                    { let on_staff_submit = on_staff_submit.clone(); view! {
                    <Show when=move || show_staff_form.get()>
                        <form class="inline-form" on:submit=on_staff_submit.clone()>
                            <input placeholder="Staff Name" prop:value=move || staff_name.get()
                                on:input=move |ev| staff_name.set(event_target_value(&ev))/>
                            <select prop:value=move || staff_duty.get()
                                on:change=move |ev| staff_duty.set(event_target_value(&ev))>
                                {STAFF_DUTIES.into_iter().map(|d| view! { <option value=d>{d}</option> }).collect_view()}
                            </select>
                            <label>
                                <input type="checkbox" prop:checked=move || staff_on_duty.get()
                                    on:change=move |ev| staff_on_duty.set(event_target_checked(&ev))/>
                                " On duty"
                            </label>
                            <button class="btn" type="submit" disabled=move || busy.get()>
                                {move || if editing_staff.get().is_some() { "Save Staff" } else { "Add Staff" }}
                            </button>
                        </form>
                    </Show>
                    } }
                </section>
            </Show>
        </div>
    }
}
