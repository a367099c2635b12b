use super::*;
use crate::state::session::{Role, SessionUser};

fn response_with_token(token: &str) -> LoginResponse {
    LoginResponse {
        message: String::new(),
        access_token: token.to_owned(),
        user: SessionUser {
            id: 1,
            first_name: "A".to_owned(),
            last_name: "B".to_owned(),
            email: "a@b.c".to_owned(),
            role: Role::Manager,
        },
    }
}

#[test]
fn endpoint_url_joins_without_double_slashes() {
    assert_eq!(endpoint_url("http://api.local/", "/auth/login"), "http://api.local/auth/login");
    assert_eq!(endpoint_url("http://api.local", "auth/login"), "http://api.local/auth/login");
}

#[test]
fn api_base_is_never_empty() {
    assert!(!api_base().is_empty());
}

#[test]
fn authorization_value_present_only_with_token() {
    assert_eq!(authorization_value(Some("t1")).as_deref(), Some("Bearer t1"));
    assert_eq!(authorization_value(None), None);
    assert_eq!(authorization_value(Some("")), None);
    assert_eq!(authorization_value(Some("   ")), None);
}

#[test]
fn rejected_message_prefers_server_text() {
    assert_eq!(rejected_message(401, r#"{"message":"Invalid credentials"}"#), "Invalid credentials");
}

#[test]
fn rejected_message_falls_back_to_status() {
    assert_eq!(rejected_message(502, "<html>bad gateway</html>"), "request failed: 502");
    assert_eq!(rejected_message(500, r#"{"statusCode":500}"#), "request failed: 500");
}

#[test]
fn rejected_error_displays_server_message_only() {
    let err = ApiError::Rejected { status: 409, message: "Email already registered".to_owned() };
    assert_eq!(err.to_string(), "Email already registered");
}

#[test]
fn validate_login_response_rejects_blank_token() {
    assert!(matches!(validate_login_response(response_with_token("  ")), Err(ApiError::InvalidResponse(_))));
    assert!(validate_login_response(response_with_token("t")).is_ok());
}
