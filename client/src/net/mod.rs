//! Networking modules for the remote authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls and `types` defines the wire schema.

pub mod api;
pub mod types;
