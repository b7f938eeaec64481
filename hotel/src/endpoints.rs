//! Backend routes, one builder per call.
//!
//! Every function returns an [`ApiRequest`] with the path, headers and body
//! the gateway expects. Callers send it with their own HTTP client and decode
//! the answer with [`crate::request::interpret`].

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use serde_json::json;

use crate::error::ApiError;
use crate::model::{BookingRequest, Credentials, InventoryItem, NewRoom, RegistrationRequest, Role, Staff, UserUpdate};
use crate::policy::{self, Action};
use crate::request::{ApiRequest, Method};

// =============================================================================
// AUTH
// =============================================================================

#[must_use]
pub fn login(credentials: &Credentials) -> ApiRequest {
    ApiRequest::new(Method::Post, "/auth/login", "Login failed").body(json!(credentials))
}

#[must_use]
pub fn register(request: &RegistrationRequest) -> ApiRequest {
    ApiRequest::new(Method::Post, "/auth/register", "Registration failed").body(json!(request))
}

#[must_use]
pub fn list_users(token: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, "/auth/users", "Failed to load users").bearer(token)
}

/// Owner-only edit of a user account.
///
/// # Errors
///
/// [`ApiError::Denied`] without building a request when `role` is not OWNER.
pub fn update_user(id: i64, update: &UserUpdate, token: &str, role: Role) -> Result<ApiRequest, ApiError> {
    policy::require(role, Action::ManageUsers)?;
    Ok(ApiRequest::new(Method::Put, format!("/auth/users/{id}"), "Failed to update user")
        .bearer(token)
        .role(role)
        .body(json!(update)))
}

/// Owner-only removal of a user account.
///
/// # Errors
///
/// [`ApiError::Denied`] without building a request when `role` is not OWNER.
pub fn delete_user(id: i64, token: &str, role: Role) -> Result<ApiRequest, ApiError> {
    policy::require(role, Action::ManageUsers)?;
    Ok(ApiRequest::new(Method::Delete, format!("/auth/users/{id}"), "Failed to delete user")
        .bearer(token)
        .role(role))
}

// =============================================================================
// INVENTORY
// =============================================================================

#[must_use]
pub fn list_items() -> ApiRequest {
    ApiRequest::new(Method::Get, "/inventory/public/items", "Failed to load inventory")
}

#[must_use]
pub fn list_staff() -> ApiRequest {
    ApiRequest::new(Method::Get, "/inventory/public/staff", "Failed to load staff")
}

#[must_use]
pub fn add_item(item: &InventoryItem, token: &str, role: Role) -> ApiRequest {
    ApiRequest::new(Method::Post, "/inventory/items", "Failed to add item")
        .bearer(token)
        .role(role)
        .body(json!(item))
}

#[must_use]
pub fn update_item(id: i64, item: &InventoryItem, token: &str, role: Role) -> ApiRequest {
    ApiRequest::new(Method::Put, format!("/inventory/items/{id}"), "Failed to update item")
        .bearer(token)
        .role(role)
        .body(json!(item))
}

#[must_use]
pub fn delete_item(id: i64, token: &str, role: Role) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("/inventory/items/{id}"), "Failed to delete item")
        .bearer(token)
        .role(role)
}

#[must_use]
pub fn add_staff(staff: &Staff, token: &str, role: Role) -> ApiRequest {
    ApiRequest::new(Method::Post, "/inventory/staff", "Failed to add staff")
        .bearer(token)
        .role(role)
        .body(json!(staff))
}

#[must_use]
pub fn update_staff(id: i64, staff: &Staff, token: &str, role: Role) -> ApiRequest {
    ApiRequest::new(Method::Put, format!("/inventory/staff/{id}"), "Failed to update staff")
        .bearer(token)
        .role(role)
        .body(json!(staff))
}

#[must_use]
pub fn delete_staff(id: i64, token: &str, role: Role) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("/inventory/staff/{id}"), "Failed to delete staff")
        .bearer(token)
        .role(role)
}

// =============================================================================
// ROOMS & RESERVATIONS
// =============================================================================

#[must_use]
pub fn available_rooms(check_in: &str, check_out: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, "/reservation-service/public/rooms/available", "Failed to load rooms")
        .query("checkIn", check_in)
        .query("checkOut", check_out)
}

#[must_use]
pub fn all_rooms() -> ApiRequest {
    ApiRequest::new(Method::Get, "/reservation-service/rooms/all", "Failed to load rooms")
}

#[must_use]
pub fn add_room(room: &NewRoom, token: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, "/reservation-service/rooms/add", "Failed to add room")
        .bearer(token)
        .body(json!(room))
}

#[must_use]
pub fn book_room(booking: &BookingRequest, token: &str, email: &str, role: Role) -> ApiRequest {
    ApiRequest::new(Method::Post, "/reservation-service/reservation/book", "Booking failed")
        .bearer(token)
        .email(email)
        .role(role)
        .body(json!(booking))
}

#[must_use]
pub fn all_reservations(token: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, "/reservation-service/reservation/all", "Failed to load reservations").bearer(token)
}

#[must_use]
pub fn reservation_details(reservation_id: i64, token: &str, role: Role) -> ApiRequest {
    ApiRequest::new(
        Method::Get,
        format!("/reservation-service/reservation/details/{reservation_id}"),
        "Failed to load reservation details",
    )
    .bearer(token)
    .role(role)
}

#[must_use]
pub fn delete_reservation(reservation_id: i64, token: &str) -> ApiRequest {
    ApiRequest::new(
        Method::Delete,
        format!("/reservation-service/reservation/{reservation_id}"),
        "Failed to delete reservation",
    )
    .bearer(token)
}

// =============================================================================
// PAYMENTS
// =============================================================================

#[must_use]
pub fn process_payment(reservation_id: i64, token: &str, email: &str, role: Role) -> ApiRequest {
    ApiRequest::new(Method::Post, "/payment-service/payment/process", "Payment failed")
        .bearer(token)
        .email(email)
        .role(role)
        .body(json!({ "reservationId": reservation_id }))
}

#[must_use]
pub fn payment_details(reservation_id: i64, token: &str, email: &str, role: Role) -> ApiRequest {
    ApiRequest::new(
        Method::Get,
        format!("/payment-service/payment/details/{reservation_id}"),
        "Failed to load payment",
    )
    .bearer(token)
    .email(email)
    .role(role)
}
