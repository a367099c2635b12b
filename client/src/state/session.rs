//! Session model for the current browser visitor.
//!
//! DESIGN
//! ======
//! The authenticated payload (user + bearer token) travels as one
//! [`Credentials`] value inside [`Session::Authenticated`], so a session with
//! a user but no token (or the reverse) cannot be constructed.
//!
//! TRADE-OFFS
//! ==========
//! A persisted token is trusted until an explicit logout. There is no expiry
//! or refresh handling.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::session_store::StoreError;

/// Console roles as spelled on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Super Admin")]
    SuperAdmin,
    Manager,
    #[serde(rename = "Team Lead")]
    TeamLead,
    #[serde(rename = "Service Agent")]
    ServiceAgent,
}

impl Role {
    /// Human-readable label, identical to the wire spelling.
    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Manager => "Manager",
            Self::TeamLead => "Team Lead",
            Self::ServiceAgent => "Service Agent",
        }
    }
}

/// The signed-in user as returned by `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }

    /// Up to two uppercase initials for the avatar badge.
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Everything an authenticated session carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub user: SessionUser,
    pub token: String,
}

/// Coarse session status used by route gating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Uninitialized,
    Authenticated,
    Unauthenticated,
}

/// Authentication state for the current page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Persisted state has not been read yet.
    #[default]
    Uninitialized,
    Authenticated(Credentials),
    Unauthenticated,
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        match self {
            Self::Uninitialized => SessionStatus::Uninitialized,
            Self::Authenticated(_) => SessionStatus::Authenticated,
            Self::Unauthenticated => SessionStatus::Unauthenticated,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Self::Authenticated(credentials) => Some(&credentials.user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated(credentials) => Some(credentials.token.as_str()),
            _ => None,
        }
    }

    /// `Authorization` header value for outbound requests, if a token is held.
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(bearer_value)
    }
}

/// Format a bearer `Authorization` header value.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Errors produced by the session manager.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The persisted user record could not be parsed. Recovered locally by
    /// starting signed-out; never shown to the user.
    #[error("persisted session is malformed: {0}")]
    MalformedPersistedSession(#[source] serde_json::Error),

    /// Writing the session record to storage failed.
    #[error("session persistence failed: {0}")]
    PersistenceFailure(#[from] StoreError),

    /// The user record could not be encoded for storage.
    #[error("session user could not be encoded: {0}")]
    UnencodableUser(#[source] serde_json::Error),

    /// The session handle was disposed before the login could be committed.
    #[error("session is no longer available")]
    Disposed,
}
