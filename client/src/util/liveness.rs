//! Per-view liveness flag.
//!
//! Requests are never cancelled when a view unmounts. Async completions
//! check the flag and drop their result once the owning view is gone.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Flag tied to the current reactive owner; cleared on its cleanup.
    #[must_use]
    pub fn install() -> Self {
        let alive = Self::new();
        let on_drop = alive.clone();
        on_cleanup(move || on_drop.mark_gone());
        alive
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn mark_gone(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
