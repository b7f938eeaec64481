//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped requests and state. Input parsing and
//! other pure decisions sit in plain functions next to the view and are
//! unit tested in the sibling `*_test.rs` file.

pub mod add_room;
pub mod book_room;
pub mod dashboard;
pub mod inventory;
pub mod login;
pub mod make_payment;
pub mod register;
pub mod reservation_details;
pub mod reservations;
pub mod users;
