//! Advisory role policy.
//!
//! SECURITY
//! ========
//! These checks only decide which controls a client offers and whether it
//! bothers to send a request. They are not a security boundary: the backend
//! enforces access control and its 401/403 answers are authoritative even
//! when the policy here said yes.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::error::ApiError;
use crate::model::Role;

/// Privileged actions a view may offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Edit or delete user accounts.
    ManageUsers,
    /// Add, edit or delete staff members.
    ManageStaff,
    /// Add, edit or delete inventory items.
    ManageInventory,
    /// Book a room for a guest.
    BookRoom,
    /// Look up priced reservation details.
    ViewReservationDetails,
    /// Process a reservation payment.
    TakePayment,
}

impl Action {
    /// Message shown when the current role may not perform the action.
    #[must_use]
    pub fn denial(self) -> &'static str {
        match self {
            Self::ManageUsers => "Only OWNER can manage users",
            Self::ManageStaff => "Only OWNER can manage staff",
            Self::ManageInventory => "Requires OWNER or MANAGER role to manage inventory",
            Self::BookRoom | Self::ViewReservationDetails | Self::TakePayment => {
                "Requires OWNER, MANAGER, or RECEPTIONIST role"
            }
        }
    }
}

/// Whether `role` is expected to be allowed to perform `action`.
#[must_use]
pub fn permits(role: Role, action: Action) -> bool {
    match action {
        Action::ManageUsers | Action::ManageStaff => role == Role::Owner,
        Action::ManageInventory => matches!(role, Role::Owner | Role::Manager),
        Action::BookRoom | Action::ViewReservationDetails | Action::TakePayment => true,
    }
}

/// Same as [`permits`] for a possibly unknown role (identity not loaded).
#[must_use]
pub fn offers(role: Option<Role>, action: Action) -> bool {
    role.is_some_and(|r| permits(r, action))
}

/// Refuse early with [`ApiError::Denied`] when the policy says no.
///
/// # Errors
///
/// Returns [`ApiError::Denied`] carrying [`Action::denial`].
pub fn require(role: Role, action: Action) -> Result<(), ApiError> {
    if permits(role, action) {
        Ok(())
    } else {
        Err(ApiError::Denied(action.denial().to_owned()))
    }
}
