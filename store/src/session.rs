use std::cell::RefCell;

use tracing::{info, warn};

use crate::storage::KeyValueStore;

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated { token: String },
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }
}

// the studio bearer token, held in memory and mirrored to local storage
//
// the token is never inspected or expired locally; it is only dropped by logout
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    key: String,
    token: RefCell<Option<String>>,
}

impl<S: KeyValueStore> SessionStore<S> {
    // pick up a token left behind by an earlier visit
    pub fn restore(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let token = storage.get(&key).filter(|token| !token.is_empty());

        SessionStore {
            storage,
            key,
            token: RefCell::new(token),
        }
    }

    pub fn state(&self) -> AuthState {
        match &*self.token.borrow() {
            Some(token) => AuthState::Authenticated {
                token: token.clone(),
            },
            None => AuthState::Unauthenticated,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn authenticate(&self, token: &str) {
        if let Err(err) = self.storage.set(&self.key, token) {
            warn!("failed to persist session token: {err}");
        }
        *self.token.borrow_mut() = Some(token.to_owned());

        info!("studio session authenticated");
    }

    pub fn logout(&self) {
        self.storage.remove(&self.key);
        *self.token.borrow_mut() = None;

        info!("studio session cleared");
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const KEY: &str = "portfolio_token";

    #[test]
    fn fresh_session_is_unauthenticated() {
        let session = SessionStore::restore(MemoryStorage::new(), KEY);

        assert_eq!(session.state(), AuthState::Unauthenticated);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn persisted_token_is_restored() {
        let session = SessionStore::restore(MemoryStorage::new().with_entry(KEY, "abc"), KEY);

        assert_eq!(
            session.state(),
            AuthState::Authenticated {
                token: String::from("abc")
            }
        );
    }

    #[test]
    fn empty_persisted_token_is_ignored() {
        let session = SessionStore::restore(MemoryStorage::new().with_entry(KEY, ""), KEY);

        assert!(!session.state().is_authenticated());
    }

    #[test]
    fn authenticate_mirrors_to_storage() {
        let session = SessionStore::restore(MemoryStorage::new(), KEY);
        session.authenticate("abc");

        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(session.storage().get(KEY).as_deref(), Some("abc"));
    }

    #[test]
    fn logout_clears_both() {
        let session = SessionStore::restore(MemoryStorage::new().with_entry(KEY, "abc"), KEY);
        session.logout();

        assert_eq!(session.state(), AuthState::Unauthenticated);
        assert_eq!(session.storage().get(KEY), None);
    }
}
