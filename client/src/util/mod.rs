//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser concerns (storage, navigation guards, async completion checks)
//! stay here so pages read as plain view code.

pub mod guard;
pub mod liveness;
pub mod storage;
pub mod task;
