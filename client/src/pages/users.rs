//! User management. Everyone signed in can list accounts; only an OWNER is
//! offered edit and delete.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use hotel::endpoints;
use hotel::model::UserUpdate;
use hotel::policy::{self, Action};
use hotel::{ApiError, Role, User};
use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api::{execute, execute_unit};
use crate::state::session::AuthContext;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

/// Replace the entry with the same id.
pub fn replace_user(users: &mut [User], updated: User) {
    if let Some(slot) = users.iter_mut().find(|u| u.id.is_some() && u.id == updated.id) {
        *slot = updated;
    }
}

/// Message for a failed edit or delete. A 403 gets a role hint.
pub fn user_action_error(err: &ApiError, verb: &str) -> String {
    if err.status() == Some(403) {
        format!("Requires OWNER role to {verb} users.")
    } else {
        err.to_string()
    }
}

#[component]
#[allow(clippy::too_many_lines)]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let alive = Liveness::install();

    let users = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let edit_id = RwSignal::new(None::<i64>);
    let edit_email = RwSignal::new(String::new());
    let edit_role = RwSignal::new(Role::Receptionist.as_str().to_owned());
    let confirm_delete = RwSignal::new(None::<i64>);

    let is_owner = move || policy::offers(auth.role(), Action::ManageUsers);

    {
        let alive = alive.clone();
        spawn(async move {
            let Some(token) = auth.token() else { return };
            let result = auth.settle(&token, execute::<Vec<User>>(endpoints::list_users(&token)).await);
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(list) => users.set(list),
                Err(_) => error.set("Failed to load users".to_owned()),
            }
            loading.set(false);
        });
    }

    let start_edit = Callback::new(move |user: User| {
        edit_id.set(user.id);
        edit_email.set(user.email);
        edit_role.set(user.role.as_str().to_owned());
        error.set(String::new());
        success.set(String::new());
    });
    let cancel_edit = move || {
        edit_id.set(None);
        edit_email.set(String::new());
        edit_role.set(Role::Receptionist.as_str().to_owned());
    };

    let alive_save = alive.clone();
    let save_edit = Callback::new(move |()| {
        let Some(id) = edit_id.get_untracked() else { return };
        error.set(String::new());
        success.set(String::new());
        let identity = match auth.identity() {
            Ok(identity) => identity,
            Err(msg) => return error.set(msg.to_owned()),
        };
        let role = match edit_role.get_untracked().parse::<Role>() {
            Ok(role) => role,
            Err(e) => return error.set(e.to_string()),
        };
        let update = UserUpdate { email: edit_email.get_untracked().trim().to_owned(), role };
        let request = match endpoints::update_user(id, &update, &identity.token, identity.role) {
            Ok(request) => request,
            Err(e) => return error.set(e.to_string()),
        };
        let alive = alive_save.clone();
        spawn(async move {
            let result = auth.settle(&identity.token, execute::<User>(request).await);
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(updated) => {
                    users.update(|list| replace_user(list, updated));
                    success.set("User updated successfully".to_owned());
                    cancel_edit();
                }
                Err(e) => error.set(user_action_error(&e, "update")),
            }
        });
    });

    let alive_delete = alive.clone();
    let delete_user = Callback::new(move |id: i64| {
        error.set(String::new());
        success.set(String::new());
        let identity = match auth.identity() {
            Ok(identity) => identity,
            Err(msg) => return error.set(msg.to_owned()),
        };
        let request = match endpoints::delete_user(id, &identity.token, identity.role) {
            Ok(request) => request,
            Err(e) => return error.set(e.to_string()),
        };
        let alive = alive_delete.clone();
        spawn(async move {
            let result = auth.settle(&identity.token, execute_unit(request).await);
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(()) => {
                    users.update(|list| list.retain(|u| u.id != Some(id)));
                    success.set("User deleted successfully".to_owned());
                }
                Err(e) => error.set(user_action_error(&e, "delete")),
            }
            confirm_delete.set(None);
        });
    });

    view! {
        <div class="users-page">
            <PageHeader title="User Management"/>
            <Notice error=error success=success/>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading users..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr><th>"ID"</th><th>"Email"</th><th>"Role"</th><th>"Actions"</th></tr>
                    </thead>
                    <tbody>
                        <For each=move || users.get() key=|u| u.id let:user>
                            {
                                let id = user.id;
                                let editing = move || id.is_some() && edit_id.get() == id;
                                let row = user.clone();
                                view! {
                                    <tr>
                                        <td>{id.map(|v| v.to_string()).unwrap_or_default()}</td>
                                        <td>
                                            <Show when=editing fallback={
                                                let email = row.email.clone();
                                                move || email.clone()
                                            }>
                                                <input type="email" prop:value=move || edit_email.get()
                                                    on:input=move |ev| edit_email.set(event_target_value(&ev))/>
                                            </Show>
                                        </td>
                                        <td>
                                            <Show when=editing fallback=move || row.role.as_str()>
                                                <select prop:value=move || edit_role.get()
                                                    on:change=move |ev| edit_role.set(event_target_value(&ev))>
                                                    {Role::ALL.into_iter().map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> }).collect_view()}
                                                </select>
                                            </Show>
                                        </td>
                                        <td>
                                            <Show when=move || is_owner() && editing()>
                                                <button class="btn btn--small" on:click=move |_| save_edit.run(())>"Save"</button>
                                                <button class="btn btn--small" on:click=move |_| cancel_edit()>"Cancel"</button>
                                            </Show>
                                            <Show when=move || is_owner() && !editing() && id.is_some()>
                                                {
                                                    let user = user.clone();
                                                    view! {
                                                        <button class="btn btn--small" on:click=move |_| start_edit.run(user.clone())>"Edit"</button>
                                                        <button class="btn btn--small btn--danger" on:click=move |_| confirm_delete.set(id)>"Delete"</button>
                                                    }
                                                }
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
            </Show>
            <Show when=move || confirm_delete.get().is_some()>
                <div class="confirm">
                    <p>{move || format!("Delete user {}?", confirm_delete.get().unwrap_or_default())}</p>
                    <button class="btn btn--danger" on:click=move |_| {
                        if let Some(id) = confirm_delete.get_untracked() { delete_user.run(id) }
                    }>"Delete"</button>
                    <button class="btn" on:click=move |_| confirm_delete.set(None)>"Cancel"</button>
                </div>
            </Show>
        </div>
    }
}
