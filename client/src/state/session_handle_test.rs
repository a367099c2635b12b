use super::*;
use leptos::reactive::owner::Owner;

use crate::state::session::Role;
use crate::util::session_store::{MemoryStore, TOKEN_KEY, USER_KEY};

fn response(token: &str) -> LoginResponse {
    LoginResponse {
        message: String::new(),
        access_token: token.to_owned(),
        user: SessionUser {
            id: 11,
            first_name: "Edsger".to_owned(),
            last_name: "Dijkstra".to_owned(),
            email: "ewd@example.com".to_owned(),
            role: Role::ServiceAgent,
        },
    }
}

#[test]
fn handle_snapshot_follows_manager_transitions() {
    let store = MemoryStore::new();
    let handle = SessionHandle::new(store.clone());
    assert!(handle.is_loading());

    handle.initialize();
    assert!(!handle.is_loading());
    assert!(!handle.is_authenticated());

    handle.login(response("t-11")).unwrap();
    assert!(handle.is_authenticated());
    assert_eq!(handle.token().as_deref(), Some("t-11"));
    assert_eq!(handle.current_user().map(|u| u.id), Some(11));
    assert!(store.contains(TOKEN_KEY) && store.contains(USER_KEY));

    handle.logout();
    assert_eq!(handle.get(), Session::Unauthenticated);
    assert!(store.is_empty());
}

#[test]
fn copies_of_a_handle_share_one_session() {
    let handle = SessionHandle::new(MemoryStore::new());
    let other = handle;
    handle.initialize();
    other.login(response("shared")).unwrap();
    assert_eq!(handle.token().as_deref(), Some("shared"));
}

#[test]
fn login_after_owner_disposal_reports_disposed() {
    let owner = Owner::new();
    let handle = owner.with(|| SessionHandle::new(MemoryStore::new()));
    owner.with(|| handle.initialize());
    owner.cleanup();

    let err = handle.login(response("late")).unwrap_err();
    assert!(matches!(err, SessionError::Disposed));
}
