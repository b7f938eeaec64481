//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared page chrome: headers with the way back to the dashboard and the
//! inline error/success lines every page shows.

pub mod notice;
pub mod page_header;
