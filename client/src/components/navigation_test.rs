use super::*;

#[test]
fn root_is_active_only_on_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/users"));
}

#[test]
fn trailing_slash_does_not_break_matching() {
    assert!(is_active("/users", "/users/"));
    assert!(is_active("/", ""));
}

#[test]
fn nested_paths_are_not_active() {
    assert!(!is_active("/users", "/users/7"));
}

#[test]
fn nav_paths_are_unique() {
    for (i, a) in NAV_ITEMS.iter().enumerate() {
        for b in &NAV_ITEMS[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn label_for_path_finds_sections() {
    assert_eq!(label_for_path("/chats"), Some("Chat"));
    assert_eq!(label_for_path("/"), Some("Dashboard"));
    assert_eq!(label_for_path("/nowhere"), None);
}
