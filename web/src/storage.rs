//! Browser persistence of the theme.
use crate::Error;
use gloo_storage::{LocalStorage, Storage};
use portfolio_core::theme::{Theme, ThemeStorage, ThemeStore};
use portfolio_core::Result as CoreResult;

/// Theme persisted in the browser's local storage as `dark` or `light`.
#[derive(Debug)]
pub struct LocalThemeStorage {
    key: String,
}

impl LocalThemeStorage {
    /// Opens local storage.
    /// `None` if local storage is not available, e.g. disabled by the user.
    pub fn open(key: impl Into<String>) -> Option<Self> {
        let available = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .is_some();

        available.then(|| Self { key: key.into() })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> CoreResult<Option<Theme>> {
        let value = LocalStorage::raw()
            .get_item(&self.key)
            .map_err(Error::from)?;

        value.map(|value| value.parse()).transpose()
    }

    fn save(&self, theme: Theme) -> CoreResult {
        LocalStorage::raw()
            .set_item(&self.key, theme.as_str())
            .map_err(Error::from)?;

        Ok(())
    }
}

/// Creates the site's theme store.
/// Falls back to an in memory store if local storage is not available.
pub fn load_theme_store(key: &str) -> ThemeStore {
    match LocalThemeStorage::open(key) {
        Some(storage) => ThemeStore::load(storage),
        None => {
            tracing::warn!("local storage not available, theme will not be persisted");
            ThemeStore::in_memory(Theme::default())
        }
    }
}
