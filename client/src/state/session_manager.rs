//! Session state machine and its persistence policy.
//!
//! ARCHITECTURE
//! ============
//! `Uninitialized -> {Authenticated, Unauthenticated}` happens once, in
//! [`SessionManager::initialize`]. Afterwards only [`SessionManager::login`]
//! and [`SessionManager::logout`] move the session. Every transition replaces
//! the whole [`Session`] value and then notifies subscribers synchronously,
//! so observers never see a partially updated session.
//!
//! PERSISTENCE
//! ===========
//! The record lives under two independent store keys. Writes go token first,
//! then user; if either write fails both keys are cleared. On
//! initialize, a lone key or an unparseable user record is treated as
//! signed-out and cleared.
//!
//! ERROR HANDLING
//! ==============
//! `initialize` and `logout` are total. `login` commits in memory before
//! reporting a persistence failure, so the visitor stays signed in for the
//! rest of the page load even when storage is full.

#[cfg(test)]
#[path = "session_manager_test.rs"]
mod session_manager_test;

use std::fmt;

use crate::net::types::LoginResponse;
use crate::state::session::{Credentials, Session, SessionError, SessionUser};
use crate::util::session_store::{SessionStore, TOKEN_KEY, USER_KEY};

/// Callback invoked with the new session after every transition.
pub type Subscriber = Box<dyn Fn(&Session)>;

/// Owns the in-memory session and is the sole writer of the persisted record.
pub struct SessionManager<S> {
    store: S,
    session: Session,
    subscribers: Vec<Subscriber>,
}

impl<S: fmt::Debug> fmt::Debug for SessionManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("store", &self.store)
            .field("session", &self.session)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store, session: Session::Uninitialized, subscribers: Vec::new() }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.session.user()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.session.authorization_header()
    }

    /// Register a callback for every subsequent transition.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&Session) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Read the persisted record once and leave `Uninitialized`.
    ///
    /// Calling this again after the first transition does nothing.
    pub fn initialize(&mut self) {
        if !self.session.is_loading() {
            return;
        }

        let next = match read_persisted(&self.store) {
            Ok(Some(credentials)) => {
                log::debug!("session restored for user {}", credentials.user.id);
                Session::Authenticated(credentials)
            }
            Ok(None) => Session::Unauthenticated,
            Err(err) => {
                log::warn!("discarding persisted session: {err}");
                clear_persisted(&self.store);
                Session::Unauthenticated
            }
        };
        self.transition(next);
    }

    /// Commit an already-validated login response to memory and storage.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::PersistenceFailure`] when the record could not
    /// be written, or [`SessionError::UnencodableUser`] when the user could not
    /// be serialized. The in-memory session is authenticated regardless.
    pub fn login(&mut self, response: LoginResponse) -> Result<(), SessionError> {
        let LoginResponse { access_token, user, .. } = response;
        let persisted = write_persisted(&self.store, &access_token, &user);
        if let Err(err) = &persisted {
            log::warn!("login committed in memory only: {err}");
        }

        log::info!("user {} signed in", user.id);
        self.transition(Session::Authenticated(Credentials { user, token: access_token }));
        persisted
    }

    /// Clear the persisted record and sign out. Always succeeds.
    pub fn logout(&mut self) {
        clear_persisted(&self.store);
        if self.session.is_authenticated() {
            log::info!("user signed out");
        }
        self.transition(Session::Unauthenticated);
    }

    fn transition(&mut self, next: Session) {
        self.session = next;
        for subscriber in &self.subscribers {
            subscriber(&self.session);
        }
    }
}

/// Absent or blank values count as missing.
fn read_key<S: SessionStore>(store: &S, key: &str) -> Option<String> {
    store.get(key).filter(|value| !value.trim().is_empty())
}

fn read_persisted<S: SessionStore>(store: &S) -> Result<Option<Credentials>, SessionError> {
    match (read_key(store, TOKEN_KEY), read_key(store, USER_KEY)) {
        (Some(token), Some(raw_user)) => {
            let user = serde_json::from_str::<SessionUser>(&raw_user).map_err(SessionError::MalformedPersistedSession)?;
            Ok(Some(Credentials { user, token }))
        }
        (None, None) => Ok(None),
        (token, _) => {
            let present = if token.is_some() { TOKEN_KEY } else { USER_KEY };
            log::warn!("ignoring orphaned `{present}` without its counterpart");
            clear_persisted(store);
            Ok(None)
        }
    }
}

fn write_persisted<S: SessionStore>(store: &S, token: &str, user: &SessionUser) -> Result<(), SessionError> {
    let raw_user = serde_json::to_string(user).map_err(SessionError::UnencodableUser)?;
    if let Err(err) = store.set(TOKEN_KEY, token) {
        clear_persisted(store);
        return Err(err.into());
    }
    if let Err(err) = store.set(USER_KEY, &raw_user) {
        clear_persisted(store);
        return Err(err.into());
    }
    Ok(())
}

fn clear_persisted<S: SessionStore>(store: &S) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}
