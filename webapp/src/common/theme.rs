use std::rc::Rc;

use dioxus::prelude::*;
use tracing::info;

use store::{
    config::PortfolioConfig,
    storage::BrowserStorage,
    theme::{DocumentRoot, Theme, ThemeStore, ambient_theme},
};

pub type AppThemeStore = ThemeStore<BrowserStorage, DocumentRoot>;

// the store does the persisting and the <html> attribute; the signal is only there so
// that components showing the current theme rerender on toggle
#[derive(Clone)]
pub struct ThemeContext {
    store: Rc<AppThemeStore>,
    theme: Signal<Theme>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        (self.theme)()
    }

    pub fn toggle(&self) {
        let next = self.store.toggle();
        let mut theme = self.theme;

        info!({ theme = %next }, "theme toggled");
        theme.set(next);
    }
}

// run once from App, before anything reads the theme
pub fn use_theme_provider(config: &PortfolioConfig) -> ThemeContext {
    let key = config.theme_storage_key();

    use_context_provider(move || {
        let store = ThemeStore::init(BrowserStorage::local(), DocumentRoot, key, ambient_theme());
        let theme = Signal::new(store.get());

        ThemeContext {
            store: Rc::new(store),
            theme,
        }
    })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
