use std::{cell::Cell, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(anyhow::Error::msg(format!("unknown theme {other}"))),
        }
    }
}

// wherever the active theme has to show up for the stylesheet to pick it up
pub trait ThemeRoot {
    fn apply(&self, theme: Theme);
}

// data-theme on <html>, which the css variables key off
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DocumentRoot;

impl ThemeRoot for DocumentRoot {
    fn apply(&self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            warn!("no document element, cannot apply theme");
            return;
        };

        if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
            warn!("failed to set data-theme: {err:?}");
        }
    }
}

// prefers-color-scheme, if the browser exposes it
pub fn ambient_theme() -> Option<Theme> {
    let query = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;

    Some(if query.matches() { Theme::Dark } else { Theme::Light })
}

// persisted value first, then the ambient preference, then light.  anything in
// storage that is not a known theme counts as absent
pub fn resolve_theme<S: KeyValueStore>(storage: &S, key: &str, ambient: Option<Theme>) -> Theme {
    storage
        .get(key)
        .and_then(|value| value.parse().ok())
        .or(ambient)
        .unwrap_or_default()
}

// light/dark preference
//
// created once in the app root.  every set updates the in-memory value, the document
// root and local storage before returning
pub struct ThemeStore<S: KeyValueStore, R: ThemeRoot> {
    storage: S,
    root: R,
    key: String,
    current: Cell<Theme>,
}

impl<S: KeyValueStore, R: ThemeRoot> ThemeStore<S, R> {
    // applies the resolved theme; storage is untouched until the first explicit set
    pub fn init(storage: S, root: R, key: impl Into<String>, ambient: Option<Theme>) -> Self {
        let key = key.into();
        let theme = resolve_theme(&storage, &key, ambient);

        debug!({ theme = %theme }, "resolved initial theme");
        root.apply(theme);

        ThemeStore {
            storage,
            root,
            key,
            current: Cell::new(theme),
        }
    }

    pub fn get(&self) -> Theme {
        self.current.get()
    }

    // storage failures are logged and otherwise ignored
    pub fn set(&self, next: Theme) {
        self.current.set(next);
        self.root.apply(next);

        if let Err(err) = self.storage.set(&self.key, next.as_str()) {
            warn!("failed to persist theme: {err}");
        }
    }

    pub fn toggle(&self) -> Theme {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn root(&self) -> &R {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::storage::MemoryStorage;

    const KEY: &str = "portfolio_theme";

    #[derive(Default)]
    struct RecordingRoot {
        applied: RefCell<Vec<Theme>>,
    }

    impl ThemeRoot for RecordingRoot {
        fn apply(&self, theme: Theme) {
            self.applied.borrow_mut().push(theme);
        }
    }

    #[test]
    fn persisted_value_beats_ambient() {
        for ambient in [None, Some(Theme::Light), Some(Theme::Dark)] {
            let storage = MemoryStorage::new().with_entry(KEY, "dark");
            assert_eq!(resolve_theme(&storage, KEY, ambient), Theme::Dark);

            let storage = MemoryStorage::new().with_entry(KEY, "light");
            assert_eq!(resolve_theme(&storage, KEY, ambient), Theme::Light);
        }
    }

    #[test]
    fn ambient_used_when_nothing_persisted() {
        let storage = MemoryStorage::new();

        assert_eq!(resolve_theme(&storage, KEY, Some(Theme::Dark)), Theme::Dark);
        assert_eq!(resolve_theme(&storage, KEY, Some(Theme::Light)), Theme::Light);
    }

    #[test]
    fn light_when_nothing_known() {
        assert_eq!(resolve_theme(&MemoryStorage::new(), KEY, None), Theme::Light);
    }

    #[test]
    fn garbage_in_storage_counts_as_absent() {
        let storage = MemoryStorage::new().with_entry(KEY, "\"dark\"");

        assert_eq!(resolve_theme(&storage, KEY, Some(Theme::Light)), Theme::Light);
    }

    #[test]
    fn init_applies_without_persisting() {
        let store = ThemeStore::init(MemoryStorage::new(), RecordingRoot::default(), KEY, Some(Theme::Dark));

        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(*store.root().applied.borrow(), vec![Theme::Dark]);
        assert!(store.storage().is_empty());
    }

    #[test]
    fn set_writes_through() {
        let store = ThemeStore::init(MemoryStorage::new(), RecordingRoot::default(), KEY, None);

        store.set(Theme::Dark);

        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(store.storage().get(KEY).as_deref(), Some("dark"));
        assert_eq!(store.root().applied.borrow().last(), Some(&Theme::Dark));
    }

    #[test]
    fn double_toggle_restores_value_and_entry() {
        let storage = MemoryStorage::new().with_entry(KEY, "dark");
        let store = ThemeStore::init(storage, RecordingRoot::default(), KEY, Some(Theme::Light));

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.storage().get(KEY).as_deref(), Some("light"));

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(store.storage().get(KEY).as_deref(), Some("dark"));
        assert_eq!(
            *store.root().applied.borrow(),
            vec![Theme::Dark, Theme::Light, Theme::Dark]
        );
    }

    #[test]
    fn storage_failure_is_not_fatal() {
        let store = ThemeStore::init(MemoryStorage::read_only(), RecordingRoot::default(), KEY, None);

        store.set(Theme::Dark);

        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(store.root().applied.borrow().last(), Some(&Theme::Dark));
        assert_eq!(store.storage().get(KEY), None);
    }
}
