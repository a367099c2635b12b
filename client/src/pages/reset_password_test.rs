use super::*;

#[test]
fn validate_reset_password_builds_request() {
    assert_eq!(
        validate_reset_password(Some("abc123"), "n3w"),
        Ok(ResetPasswordRequest { token: "abc123".to_owned(), new_password: "n3w".to_owned() })
    );
}

#[test]
fn validate_reset_password_requires_token() {
    assert_eq!(validate_reset_password(None, "n3w"), Err("This reset link is missing its token."));
    assert_eq!(validate_reset_password(Some("  "), "n3w"), Err("This reset link is missing its token."));
}

#[test]
fn validate_reset_password_requires_new_password() {
    assert_eq!(validate_reset_password(Some("abc"), ""), Err("Enter a new password."));
}
