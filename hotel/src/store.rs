//! Persisted token slot.
//!
//! A session store holds at most one value under [`TOKEN_KEY`]. The browser
//! backs it with `localStorage`, the CLI with a JSON file; [`MemoryStore`]
//! serves tests and builds with no persistent storage.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StoreError;

/// Storage key of the persisted bearer token.
pub const TOKEN_KEY: &str = "token";

/// Single-slot token persistence.
pub trait SessionStore {
    /// Read the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replace the persisted token.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage cannot be written.
    fn save(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the persisted token. Clearing an empty slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage cannot be written.
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-process store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    /// Store that starts out holding `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(token.to_owned()))) }
    }

    /// Current slot contents without going through the trait.
    #[must_use]
    pub fn peek(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.peek())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}
