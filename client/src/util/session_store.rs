//! Durable key-value storage backing the persisted session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager is the only writer of [`TOKEN_KEY`] and [`USER_KEY`].
//! Stores hold strings and nothing else: no relationship between keys is
//! enforced here, and no ordering exists across multiple writes.
//!
//! Browser builds use `window.localStorage`. SSR and tests use
//! [`MemoryStore`], whose clones share one map so a page reload can be
//! simulated by building a second manager over a clone.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key holding the raw bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Key holding the JSON-serialized session user.
pub const USER_KEY: &str = "user_data";

/// Failures raised by [`SessionStore::set`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing storage refused the write because its quota is full.
    #[error("storage quota exceeded while writing `{key}`")]
    QuotaExceeded { key: String },

    /// The backing storage is missing or rejected the write for another reason.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string storage scoped to the current origin.
pub trait SessionStore {
    /// Read `key`, returning `None` when it is missing or storage is unreachable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);
}

impl<T: SessionStore + ?Sized> SessionStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` currently holds a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`, available in hydrated browser builds only.
///
/// Outside the browser every read is absent and every write fails with
/// [`StoreError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn classify_write_error(key: &str, err: &wasm_bindgen::JsValue) -> StoreError {
    use wasm_bindgen::JsCast;

    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) if ex.name() == "QuotaExceededError" => StoreError::QuotaExceeded { key: key.to_owned() },
        Some(ex) => StoreError::Unavailable(ex.message()),
        None => StoreError::Unavailable(format!("{err:?}")),
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| StoreError::Unavailable("localStorage is not accessible".to_owned()))?;
            storage.set_item(key, value).map_err(|err| classify_write_error(key, &err))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable("localStorage requires a browser".to_owned()))
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
