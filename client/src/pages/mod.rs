//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and remote call; session commits go through
//! the session handle and rendering chrome comes from `components`.

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;
