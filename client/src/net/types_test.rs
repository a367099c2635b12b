use super::*;
use crate::state::session::Role;

#[test]
fn login_response_parses_server_payload() {
    let raw = r#"{
        "message": "Login successful",
        "accessToken": "jwt-token",
        "user": {"id": 3, "firstName": "Grace", "lastName": "Hopper", "email": "grace@example.com", "role": "Super Admin"}
    }"#;
    let response: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(response.access_token, "jwt-token");
    assert_eq!(response.message, "Login successful");
    assert_eq!(response.user.role, Role::SuperAdmin);
    assert_eq!(response.user.id, 3);
}

#[test]
fn login_response_message_is_optional() {
    let raw = r#"{"accessToken":"t","user":{"id":1,"firstName":"A","lastName":"B","email":"a@b.c","role":"Manager"}}"#;
    let response: LoginResponse = serde_json::from_str(raw).unwrap();
    assert!(response.message.is_empty());
}

#[test]
fn register_request_uses_snake_case_fields() {
    let body = RegisterRequest {
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        email: "grace@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace@example.com",
            "password": "hunter2",
        })
    );
}

#[test]
fn reset_password_request_uses_camel_case_password_field() {
    let body = ResetPasswordRequest { token: "reset-1".to_owned(), new_password: "s3cret".to_owned() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "token": "reset-1", "newPassword": "s3cret" })
    );
}

#[test]
fn error_body_text_accepts_string_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
    assert_eq!(body.text().as_deref(), Some("Invalid credentials"));
}

#[test]
fn error_body_text_joins_validation_messages() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":["email must be an email","password too short"]}"#).unwrap();
    assert_eq!(body.text().as_deref(), Some("email must be an email; password too short"));
}

#[test]
fn error_body_text_is_none_for_blank_or_missing_message() {
    let blank: ErrorBody = serde_json::from_str(r#"{"message":"   "}"#).unwrap();
    let missing: ErrorBody = serde_json::from_str(r#"{"statusCode":500}"#).unwrap();
    assert_eq!(blank.text(), None);
    assert_eq!(missing.text(), None);
}
