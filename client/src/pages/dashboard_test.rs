use super::*;
use crate::state::session::Role;

fn user(first_name: &str) -> SessionUser {
    SessionUser {
        id: 5,
        first_name: first_name.to_owned(),
        last_name: "Turing".to_owned(),
        email: "alan@example.com".to_owned(),
        role: Role::SuperAdmin,
    }
}

#[test]
fn greeting_uses_first_name() {
    assert_eq!(greeting(Some(&user("Alan"))), "Welcome back, Alan");
}

#[test]
fn greeting_without_user_or_name_is_generic() {
    assert_eq!(greeting(None), "Welcome back");
    assert_eq!(greeting(Some(&user("  "))), "Welcome back");
}
