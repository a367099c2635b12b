//! REST helpers for the remote authentication API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Rejected`] carrying the server's
//! `message` text, which screens show verbatim. None of these calls touch
//! session state; committing a login is the caller's job.
//!
//! Every request carries `Authorization: Bearer <token>` when the caller
//! passes a token and no `Authorization` header otherwise.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, ResetPasswordRequest,
};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::session::bearer_value;

/// API origin used when `CONSOLE_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Errors surfaced to screens from remote calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    InvalidResponse(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("CONSOLE_API_URL").unwrap_or(DEFAULT_API_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn authorization_value(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty()).map(bearer_value)
}

/// User-facing text for a rejected request.
#[cfg(any(test, feature = "hydrate"))]
fn rejected_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.text())
        .unwrap_or_else(|| format!("request failed: {status}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn validate_login_response(response: LoginResponse) -> Result<LoginResponse, ApiError> {
    if response.access_token.trim().is_empty() {
        return Err(ApiError::InvalidResponse("login response carried an empty access token".to_owned()));
    }
    Ok(response)
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let url = endpoint_url(api_base(), path);
    let mut request = gloo_net::http::Request::post(&url);
    if let Some(value) = authorization_value(token) {
        request = request.header("Authorization", &value);
    }
    let resp = request
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        log::warn!("POST {path} rejected with {status}");
        return Err(ApiError::Rejected { status, message: rejected_message(status, &text) });
    }
    resp.json::<T>().await.map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

/// Authenticate via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] on bad credentials, or a transport/parse
/// error. An empty access token is reported as [`ApiError::InvalidResponse`].
pub async fn login(request: &LoginRequest, token: Option<&str>) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response: LoginResponse = post_json("/auth/login", request, token).await?;
        validate_login_response(response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, token);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the server's message on failure.
pub async fn register(request: &RegisterRequest, token: Option<&str>) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/auth/register", request, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, token);
        Err(ApiError::Unavailable)
    }
}

/// Request a reset email via `POST /auth/forgot-password`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the server's message on failure.
pub async fn forgot_password(request: &ForgotPasswordRequest, token: Option<&str>) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/auth/forgot-password", request, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, token);
        Err(ApiError::Unavailable)
    }
}

/// Set a new password via `POST /auth/reset-password`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the server's message on failure.
pub async fn reset_password(request: &ResetPasswordRequest, token: Option<&str>) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/auth/reset-password", request, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, token);
        Err(ApiError::Unavailable)
    }
}
