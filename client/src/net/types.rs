//! Wire DTOs for the remote authentication API.
//!
//! DESIGN
//! ======
//! Field names mirror the server contract exactly: login and reset use
//! camelCase, registration uses snake_case. Response users are parsed into
//! [`SessionUser`] so an unknown role fails at the boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::SessionUser;

/// `POST /auth/login` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` success body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub access_token: String,
    pub user: SessionUser,
}

/// `POST /auth/register` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// `POST /auth/forgot-password` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// `POST /auth/reset-password` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Generic `{ message }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Error body returned with non-2xx responses.
///
/// `message` is either a single string or a list of validation messages.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Flatten `message` into one user-facing line, if it carries any text.
    pub fn text(&self) -> Option<String> {
        let text = match self.message.as_ref()? {
            serde_json::Value::String(s) => s.trim().to_owned(),
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
            _ => String::new(),
        };
        (!text.is_empty()).then_some(text)
    }
}
