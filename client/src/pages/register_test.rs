use super::*;

fn filled() -> RegistrationForm {
    RegistrationForm {
        first_name: " Grace ".to_owned(),
        last_name: "Hopper".to_owned(),
        email: "grace@example.com ".to_owned(),
        password: "cobol".to_owned(),
        confirm_password: "cobol".to_owned(),
    }
}

#[test]
fn validate_registration_trims_names_and_email() {
    assert_eq!(
        validate_registration(&filled()),
        Ok(RegisterRequest {
            first_name: "Grace".to_owned(),
            last_name: "Hopper".to_owned(),
            email: "grace@example.com".to_owned(),
            password: "cobol".to_owned(),
        })
    );
}

#[test]
fn validate_registration_rejects_mismatched_passwords() {
    let form = RegistrationForm { confirm_password: "fortran".to_owned(), ..filled() };
    assert_eq!(validate_registration(&form), Err("Passwords do not match"));
}

#[test]
fn validate_registration_requires_every_field() {
    let form = RegistrationForm { last_name: "  ".to_owned(), ..filled() };
    assert_eq!(validate_registration(&form), Err("All fields are required."));
    assert_eq!(validate_registration(&RegistrationForm::default()), Err("All fields are required."));
}

#[test]
fn validate_registration_checks_email_shape() {
    let form = RegistrationForm { email: "grace".to_owned(), ..filled() };
    assert_eq!(validate_registration(&form), Err("Enter a valid email address."));
}

#[test]
fn registered_redirect_targets_sign_in() {
    assert!(REGISTERED_REDIRECT.starts_with(crate::util::route_gate::SIGN_IN_PATH));
}
