//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the plain data model, `session_manager` the state machine
//! over a store, and `session_handle` its reactive face for components.

pub mod session;
pub mod session_handle;
pub mod session_manager;
