//! # hotel
//!
//! Shared session and REST contract for the hotel desk clients.
//!
//! Both the Leptos browser client (`client/`) and the terminal client
//! (`cli/`) depend on this crate. It owns everything that does not care how
//! bytes reach the backend or where a token is kept:
//!
//! - [`session`]: the `Session` state machine and the [`AuthSessionManager`]
//!   that drives it against an [`AuthApi`] and a [`SessionStore`].
//! - [`guard`]: the route guard decision.
//! - [`policy`]: advisory client-side role checks.
//! - [`model`]: wire records exchanged with the backend.
//! - [`request`] and [`endpoints`]: transport-neutral request descriptions
//!   and the backend routes that produce them.
//! - [`error`]: the error taxonomy surfaced to views.
//!
//! SECURITY
//! ========
//! Role checks in this crate are advisory. They decide which controls a view
//! offers and which requests a client bothers to send; the backend remains
//! the sole authority on access control and its rejections are final.

pub mod api;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod guard;
pub mod model;
pub mod policy;
pub mod request;
pub mod session;
pub mod store;

pub use api::AuthApi;
pub use config::ApiConfig;
pub use error::{ApiError, ConfigError, StoreError};
pub use guard::{RouteAccess, RouteDecision};
pub use model::{AuthResponse, Credentials, RegistrationRequest, Role, User};
pub use request::{ApiRequest, Method};
pub use session::{AuthSessionManager, IDENTITY_UNKNOWN, Session, SessionPhase};
pub use store::{MemoryStore, SessionStore};
