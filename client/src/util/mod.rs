//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage) and
//! routing policy from page and component logic.

pub mod route_gate;
pub mod session_store;
