//! Networking for the browser client.
//!
//! `api` sends `hotel::ApiRequest` descriptions over `gloo-net` and exposes
//! the browser implementation of `hotel::AuthApi`.

pub mod api;
