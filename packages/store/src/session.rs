//! # Persisted authentication state
//!
//! [`AuthStore`] owns the single `{token, user}` record of the client. Handles
//! are cheap clones of one shared state, so the request pipeline and the UI see
//! the same session without reaching for a global.
//!
//! ## Persistence
//!
//! Every mutation writes the record through a [`SessionStorage`] backend under
//! [`AUTH_STORAGE_KEY`], using the envelope the browser app always used:
//!
//! ```json
//! {"state": {"token": "…", "user": {…}}, "version": 0}
//! ```
//!
//! A missing or unreadable record loads as the empty session. Backend write
//! failures are logged by the backend and otherwise ignored; the in-memory
//! state stays authoritative until the next reload.
//!
//! ## Change notification
//!
//! [`AuthStore::subscribe`] registers a listener that runs after each
//! mutation. The UI uses it to mirror the session into a reactive signal, so a
//! logout triggered deep inside the request pipeline re-renders the navbar.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::models::{AuthSession, User};

/// Storage key of the persisted session record.
pub const AUTH_STORAGE_KEY: &str = "auth-storage";

/// Synchronous string key/value persistence.
pub trait SessionStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// What the request pipeline needs from the session: read credentials at send
/// time, store them after login, drop them on authorization failure.
pub trait SessionProvider {
    fn token(&self) -> Option<String>;
    fn user(&self) -> Option<User>;
    fn set_auth(&self, token: String, user: User);
    fn logout(&self);
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedAuth {
    state: AuthSession,
    #[serde(default)]
    version: u32,
}

type Listener = Box<dyn Fn(&AuthSession)>;

struct Inner<S> {
    storage: S,
    session: RefCell<AuthSession>,
    listeners: RefCell<Vec<Listener>>,
}

/// Shared handle to the client's session.
pub struct AuthStore<S> {
    inner: Rc<Inner<S>>,
}

impl<S> Clone for AuthStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S> PartialEq for AuthStore<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: SessionStorage> AuthStore<S> {
    /// Restore the session persisted in `storage`, if any.
    pub fn load(storage: S) -> Self {
        let session = storage
            .load(AUTH_STORAGE_KEY)
            .and_then(|raw| match serde_json::from_str::<PersistedAuth>(&raw) {
                Ok(persisted) => Some(persisted.state),
                Err(e) => {
                    tracing::warn!("Discarding unreadable session record: {e}");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            inner: Rc::new(Inner {
                storage,
                session: RefCell::new(session),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn snapshot(&self) -> AuthSession {
        self.inner.session.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.borrow().is_authenticated()
    }

    /// Run `listener` after every change to the session.
    pub fn subscribe(&self, listener: impl Fn(&AuthSession) + 'static) {
        self.inner.listeners.borrow_mut().push(Box::new(listener));
    }

    fn replace(&self, session: AuthSession) {
        *self.inner.session.borrow_mut() = session.clone();

        let persisted = PersistedAuth {
            state: session.clone(),
            version: 0,
        };
        match serde_json::to_string(&persisted) {
            Ok(raw) => self.inner.storage.save(AUTH_STORAGE_KEY, &raw),
            Err(e) => tracing::warn!("Failed to encode session record: {e}"),
        }

        for listener in self.inner.listeners.borrow().iter() {
            listener(&session);
        }
    }
}

impl<S: SessionStorage> SessionProvider for AuthStore<S> {
    fn token(&self) -> Option<String> {
        self.inner.session.borrow().token.clone()
    }

    fn user(&self) -> Option<User> {
        self.inner.session.borrow().user.clone()
    }

    fn set_auth(&self, token: String, user: User) {
        tracing::info!("Signed in as user {}", user.id);
        self.replace(AuthSession {
            token: Some(token),
            user: Some(user),
        });
    }

    fn logout(&self) {
        if self.is_authenticated() {
            tracing::info!("Session cleared");
        }
        self.replace(AuthSession::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use std::cell::Cell;

    fn user() -> User {
        User {
            id: 7,
            first_name: "Ana".into(),
            last_name: "Rojas".into(),
            email: "ana@example.com".into(),
            gender: "female".into(),
        }
    }

    #[test]
    fn test_empty_storage_is_signed_out() {
        let store = AuthStore::load(MemoryStorage::new());
        assert!(!store.is_authenticated());
        assert_eq!(store.snapshot(), AuthSession::default());
    }

    #[test]
    fn test_set_auth_persists_envelope() {
        let storage = MemoryStorage::new();
        let store = AuthStore::load(storage.clone());
        store.set_auth("tok-1".into(), user());

        assert_eq!(store.token().as_deref(), Some("tok-1"));
        let raw = storage.load(AUTH_STORAGE_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["state"]["token"], "tok-1");
        assert_eq!(value["state"]["user"]["firstName"], "Ana");
        assert_eq!(value["version"], 0);
    }

    #[test]
    fn test_session_survives_reload() {
        let storage = MemoryStorage::new();
        AuthStore::load(storage.clone()).set_auth("tok-2".into(), user());

        let reloaded = AuthStore::load(storage);
        assert_eq!(reloaded.token().as_deref(), Some("tok-2"));
        assert_eq!(reloaded.user(), Some(user()));
    }

    #[test]
    fn test_logout_clears_memory_and_storage() {
        let storage = MemoryStorage::new();
        let store = AuthStore::load(storage.clone());
        store.set_auth("tok".into(), user());
        store.logout();

        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(!AuthStore::load(storage).is_authenticated());
    }

    #[test]
    fn test_corrupt_record_loads_empty() {
        let storage = MemoryStorage::new();
        storage.save(AUTH_STORAGE_KEY, "{not json");
        assert!(!AuthStore::load(storage).is_authenticated());
    }

    #[test]
    fn test_clones_share_state_and_notify() {
        let store = AuthStore::load(MemoryStorage::new());
        let other = store.clone();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        store.subscribe(move |_| seen.set(seen.get() + 1));

        other.set_auth("tok".into(), user());
        assert!(store.is_authenticated());
        other.logout();
        assert!(!store.is_authenticated());
        assert_eq!(calls.get(), 2);
        assert!(store == other);
    }
}
