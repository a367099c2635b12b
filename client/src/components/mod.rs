//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and read the session handle from Leptos
//! context; route-level orchestration stays in `pages` and `util::route_gate`.

pub mod navigation;
pub mod shell;
pub mod sidebar;
pub mod spinner;
