//! Wire records exchanged with the hotel backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Records the backend
//! assigns ids to carry `Option<i64>` ids so the same type works for create
//! payloads and responses. Dates stay ISO `YYYY-MM-DD` strings; the clients
//! only compare and display them.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// IDENTITY
// =============================================================================

/// Staff role attached to a user account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Owner,
    Manager,
    Receptionist,
}

impl Role {
    /// Every role, in the order registration forms offer them.
    pub const ALL: [Role; 3] = [Role::Owner, Role::Manager, Role::Receptionist];

    /// Wire spelling, also sent as the `X-User-Role` header.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Manager => "MANAGER",
            Self::Receptionist => "RECEPTIONIST",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role `{0}` (expected OWNER, MANAGER or RECEPTIONIST)")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseRoleError(trimmed.to_owned()))
    }
}

/// Identity of an authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend id; some auth responses omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    pub role: Role,
}

/// Login form payload. Never persisted.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration form payload. Never persisted.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Successful login/register response.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// Owner-driven edit of another account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    pub email: String,
    pub role: Role,
}

// =============================================================================
// ROOMS & RESERVATIONS
// =============================================================================

/// A bookable room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    /// Room class such as `SINGLE`, `DOUBLE` or `SUITE`.
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    #[serde(default)]
    pub available: bool,
}

/// Payload for adding a room.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub room_number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub available: bool,
}

/// A stored reservation as listed by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub room_id: i64,
    pub check_in_date: String,
    pub check_out_date: String,
}

impl Reservation {
    /// Case-insensitive match of `query` against guest name or email.
    /// A blank query matches everything.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.guest_name.to_lowercase().contains(&needle)
            || self.guest_email.to_lowercase().contains(&needle)
    }
}

/// Payload for booking a room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub guest_name: String,
    pub guest_email: String,
    pub room_id: i64,
    pub check_in_date: String,
    pub check_out_date: String,
}

/// Backend answer to a successful booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    #[serde(default)]
    pub status: String,
    pub reservation_id: i64,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub room_number: String,
    #[serde(default)]
    pub check_in_date: String,
    #[serde(default)]
    pub check_out_date: String,
    /// Total stay price.
    #[serde(rename = "Price", default)]
    pub price: f64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Priced summary of a reservation, used before taking payment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetails {
    pub guest_name: String,
    #[serde(default)]
    pub guest_email: Option<String>,
    pub room_number: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(default)]
    pub check_in_date: Option<String>,
    #[serde(default)]
    pub check_out_date: Option<String>,
}

/// Validate a stay's date range.
///
/// # Errors
///
/// Returns a user-facing message when either date is not a real
/// `YYYY-MM-DD` calendar date or the check-out does not fall after the
/// check-in.
pub fn validate_stay(check_in: &str, check_out: &str) -> Result<(), &'static str> {
    let (Some(from), Some(to)) = (parse_date(check_in), parse_date(check_out)) else {
        return Err("Enter check-in and check-out dates as YYYY-MM-DD.");
    };
    if to <= from {
        return Err("Check-out must be after check-in.");
    }
    Ok(())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

// =============================================================================
// INVENTORY & STAFF
// =============================================================================

/// A stocked inventory item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub quantity: i32,
    pub category: String,
}

/// A hotel staff member (kitchen, housekeeping, ...), distinct from user accounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// Free-text duty such as `CHEF` or `HOUSEKEEPING`.
    pub role: String,
    #[serde(default)]
    pub on_duty: bool,
}

// =============================================================================
// PAYMENTS
// =============================================================================

const PROCESSED_BY_PREFIX: &str = "Payment processed by ";

/// Result of processing or looking up a payment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    #[serde(default)]
    pub payment_id: Option<i64>,
    pub reservation_id: i64,
    #[serde(default)]
    pub guest_name: String,
    pub amount: f64,
    pub status: String,
    #[serde(default)]
    pub processed_by: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PaymentReceipt {
    /// Who took the payment, e.g. `"RECEPTIONIST desk@hotel.test"`.
    ///
    /// The process endpoint only reports it inside `message`; the details
    /// endpoint sends `processedBy` directly.
    #[must_use]
    pub fn actor(&self) -> Option<&str> {
        self.message
            .as_deref()
            .and_then(|m| m.strip_prefix(PROCESSED_BY_PREFIX))
            .or(self.processed_by.as_deref())
    }
}
