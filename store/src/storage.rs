use std::{cell::RefCell, collections::HashMap, rc::Rc};

use gloo_console::error as console_error;
use tracing::warn;

// synchronous string key/value persistence
//
// reads and writes complete before returning, so a value written by one store is
// visible to the next read anywhere in the app.  values are raw strings, not json,
// so "dark" is stored as dark rather than "dark"
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    fn remove(&self, key: &str);
}

// window.localStorage
//
// the handle is looked up once.  browsers may refuse it outright (cookies disabled,
// sandboxed iframes), in which case reads find nothing and writes fail
#[derive(Clone, Debug, Default)]
pub struct BrowserStorage {
    handle: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let handle = web_sys::window().and_then(|window| window.local_storage().ok().flatten());

        if handle.is_none() {
            warn!("local storage unavailable, nothing will persist");
        }

        BrowserStorage { handle }
    }

    pub fn unavailable() -> Self {
        BrowserStorage { handle: None }
    }

    pub fn is_available(&self) -> bool {
        self.handle.is_some()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let handle = self.handle.as_ref()?;

        match handle.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let Some(handle) = self.handle.as_ref() else {
            return Err(anyhow::Error::msg(format!("local storage unavailable, dropped {key}")));
        };

        handle.set_item(key, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }

    fn remove(&self, key: &str) {
        let Some(handle) = self.handle.as_ref() else {
            return;
        };

        if let Err(err) = handle.remove_item(key) {
            console_error!(format!("Failed to remove local storage {key}: {err:?}"));
        }
    }
}

// in-process storage, shared between clones
//
// stands in for localStorage wherever there is no window, and lets a caller simulate
// a storage that refuses writes (quota exceeded, private browsing)
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    pub fn read_only() -> Self {
        MemoryStorage {
            items: Rc::default(),
            read_only: true,
        }
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.read_only {
            return Err(anyhow::Error::msg(format!("storage is read only, dropped {key}")));
        }

        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if !self.read_only {
            self.items.borrow_mut().remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set("portfolio_theme", "dark").unwrap();

        assert_eq!(other.get("portfolio_theme").as_deref(), Some("dark"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn read_only_refuses_writes() {
        let storage = MemoryStorage::read_only();

        assert!(storage.set("portfolio_token", "abc").is_err());
        assert!(storage.is_empty());
    }

    #[test]
    fn remove_drops_entry() {
        let storage = MemoryStorage::new().with_entry("portfolio_token", "abc");
        storage.remove("portfolio_token");

        assert_eq!(storage.get("portfolio_token"), None);
    }

    #[test]
    fn missing_local_storage_degrades_quietly() {
        let storage = BrowserStorage::unavailable();

        assert!(!storage.is_available());
        assert_eq!(storage.get("portfolio_theme"), None);
        assert!(storage.set("portfolio_theme", "dark").is_err());
        storage.remove("portfolio_theme");
    }

    #[test]
    fn theme_and_session_survive_missing_local_storage() {
        use crate::{
            session::SessionStore,
            theme::{Theme, ThemeRoot, ThemeStore},
        };

        struct NoRoot;

        impl ThemeRoot for NoRoot {
            fn apply(&self, _theme: Theme) {}
        }

        let theme = ThemeStore::init(BrowserStorage::unavailable(), NoRoot, "portfolio_theme", Some(Theme::Dark));
        assert_eq!(theme.get(), Theme::Dark);
        assert_eq!(theme.toggle(), Theme::Light);

        let session = SessionStore::restore(BrowserStorage::unavailable(), "portfolio_token");
        assert!(!session.state().is_authenticated());
    }
}
