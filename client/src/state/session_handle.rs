//! Reactive session handle provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one handle per page load and provides it as context. Screens
//! and route gates read the reactive snapshot; only `login`/`logout` (and the
//! one-time `initialize`) reach the underlying [`SessionManager`].
//!
//! The manager lives in thread-local reactive storage; a subscriber mirrors
//! every transition into an `RwSignal<Session>` so gates re-render on change.

#[cfg(test)]
#[path = "session_handle_test.rs"]
mod session_handle_test;

use leptos::prelude::*;

use crate::net::types::LoginResponse;
use crate::state::session::{Session, SessionError, SessionUser};
use crate::state::session_manager::SessionManager;
use crate::util::session_store::SessionStore;

type DynManager = SessionManager<Box<dyn SessionStore>>;

/// Copyable handle to the page's session.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    snapshot: RwSignal<Session>,
    manager: StoredValue<DynManager, LocalStorage>,
}

impl SessionHandle {
    /// Build an uninitialized handle over `store`.
    pub fn new(store: impl SessionStore + 'static) -> Self {
        let store: Box<dyn SessionStore> = Box::new(store);
        let mut manager = SessionManager::new(store);
        let snapshot = RwSignal::new(manager.session().clone());
        manager.subscribe(move |session| snapshot.set(session.clone()));
        Self { snapshot, manager: StoredValue::new_local(manager) }
    }

    /// Read the current session, tracking it in reactive scopes.
    pub fn with<U>(&self, f: impl FnOnce(&Session) -> U) -> U {
        self.snapshot.with(f)
    }

    pub fn get(&self) -> Session {
        self.snapshot.get()
    }

    pub fn is_loading(&self) -> bool {
        self.with(Session::is_loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.with(Session::is_authenticated)
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.with(|session| session.user().cloned())
    }

    /// Current bearer token, read without subscribing.
    pub fn token(&self) -> Option<String> {
        self.snapshot.with_untracked(|session| session.token().map(str::to_owned))
    }

    pub fn initialize(&self) {
        self.manager.update_value(SessionManager::initialize);
    }

    /// Commit a successful login response.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::PersistenceFailure`] when storage refused the
    /// record; the session is authenticated for this page load regardless.
    /// Returns [`SessionError::Disposed`] when the handle's owner is gone and
    /// nothing was committed.
    pub fn login(&self, response: LoginResponse) -> Result<(), SessionError> {
        self.manager.try_update_value(|manager| manager.login(response)).unwrap_or(Err(SessionError::Disposed))
    }

    pub fn logout(&self) {
        self.manager.update_value(SessionManager::logout);
    }
}

/// Fetch the session handle provided by `App`.
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}
