use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_get_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get(TOKEN_KEY), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_set_overwrites_previous_value() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "t1").unwrap();
    store.set(TOKEN_KEY, "t2").unwrap();
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t2"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_is_idempotent() {
    let store = MemoryStore::new();
    store.set(USER_KEY, "{}").unwrap();
    store.remove(USER_KEY);
    store.remove(USER_KEY);
    assert!(!store.contains(USER_KEY));
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let reloaded = store.clone();
    store.set(TOKEN_KEY, "abc").unwrap();
    assert_eq!(reloaded.get(TOKEN_KEY).as_deref(), Some("abc"));
}

#[test]
fn boxed_store_delegates_to_inner() {
    let inner = MemoryStore::new();
    let boxed: Box<dyn SessionStore> = Box::new(inner.clone());
    boxed.set(TOKEN_KEY, "boxed").unwrap();
    assert_eq!(inner.get(TOKEN_KEY).as_deref(), Some("boxed"));
    boxed.remove(TOKEN_KEY);
    assert!(inner.is_empty());
}

// =============================================================
// BrowserStore outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_without_window_reads_nothing_and_refuses_writes() {
    let store = BrowserStore;
    assert_eq!(store.get(TOKEN_KEY), None);
    assert!(matches!(store.set(TOKEN_KEY, "t"), Err(StoreError::Unavailable(_))));
    store.remove(TOKEN_KEY);
}

#[test]
fn store_error_messages_name_the_key() {
    let err = StoreError::QuotaExceeded { key: USER_KEY.to_owned() };
    assert_eq!(err.to_string(), "storage quota exceeded while writing `user_data`");
}
