//! Theme store.
//!
//! Holds the dark/light flag for the whole site,
//! persists it on every change, and notifies subscribers.
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

// *************
// *** Theme ***
// *************

/// Visual mode of the site.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Persisted representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(Error::InvalidTheme(other.to_string())),
        }
    }
}

/// Snapshot of the theme flag.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl From<Theme> for ThemeState {
    fn from(theme: Theme) -> Self {
        Self {
            is_dark: theme.is_dark(),
        }
    }
}

impl From<ThemeState> for Theme {
    fn from(state: ThemeState) -> Self {
        if state.is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

// ***************
// *** Storage ***
// ***************

/// Persistence backend of the [`ThemeStore`].
pub trait ThemeStorage {
    /// Loads the persisted theme.
    /// `Ok(None)` if no value was persisted.
    fn load(&self) -> Result<Option<Theme>>;

    /// Persists the theme, overwriting any previous value.
    fn save(&self, theme: Theme) -> Result;
}

/// In memory storage.
/// Holds the raw persisted value so malformed values can be represented.
#[derive(Default, Debug)]
pub struct MemoryStorage {
    value: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage with a raw value already persisted.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(value.into())),
        }
    }

    /// Raw persisted value.
    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Theme>> {
        self.value
            .borrow()
            .as_ref()
            .map(|value| value.parse())
            .transpose()
    }

    fn save(&self, theme: Theme) -> Result {
        *self.value.borrow_mut() = Some(theme.as_str().to_string());
        Ok(())
    }
}

impl<S> ThemeStorage for Rc<S>
where
    S: ThemeStorage + ?Sized,
{
    fn load(&self) -> Result<Option<Theme>> {
        (**self).load()
    }

    fn save(&self, theme: Theme) -> Result {
        (**self).save(theme)
    }
}

// *************
// *** Store ***
// *************

type Listener = Rc<dyn Fn(Theme)>;

struct Inner {
    theme: Cell<Theme>,

    /// `None` once persistence failed,
    /// the store is then in memory only for the rest of the session.
    storage: RefCell<Option<Box<dyn ThemeStorage>>>,
    listeners: RefCell<Vec<(usize, Listener)>>,
    next_listener_id: Cell<usize>,
}

/// Process wide theme flag.
///
/// Cloning the store is cheap and clones share state.
/// The store is passed to views explicitly, e.g. through a context provider.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<Inner>,
}

impl ThemeStore {
    /// Creates a store, reading the initial theme from `storage`.
    /// Falls back to [`Theme::Dark`] if nothing is persisted or the value can not be read.
    pub fn load(storage: impl ThemeStorage + 'static) -> Self {
        let theme = match storage.load() {
            Ok(theme) => theme.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(?err, "could not load theme, using default");
                Theme::default()
            }
        };

        Self::from_parts(theme, Some(Box::new(storage)))
    }

    /// Creates a store without persistence.
    pub fn in_memory(theme: Theme) -> Self {
        Self::from_parts(theme, None)
    }

    fn from_parts(theme: Theme, storage: Option<Box<dyn ThemeStorage>>) -> Self {
        Self {
            inner: Rc::new(Inner {
                theme: Cell::new(theme),
                storage: RefCell::new(storage),
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
            }),
        }
    }

    pub fn get(&self) -> ThemeState {
        self.theme().into()
    }

    pub fn theme(&self) -> Theme {
        self.inner.theme.get()
    }

    /// Whether the theme is still persisted.
    pub fn is_persistent(&self) -> bool {
        self.inner.storage.borrow().is_some()
    }

    /// Flips the theme, persists it, then notifies subscribers.
    pub fn toggle(&self) {
        let theme = self.theme().toggled();
        self.inner.theme.set(theme);
        tracing::debug!(%theme, "theme toggled");

        let failed = match self.inner.storage.borrow().as_ref() {
            None => false,
            Some(storage) => match storage.save(theme) {
                Ok(_) => false,
                Err(err) => {
                    tracing::warn!(?err, "could not persist theme, continuing in memory");
                    true
                }
            },
        };

        if failed {
            self.inner.storage.replace(None);
        }

        // listeners may subscribe or unsubscribe while being notified
        let listeners = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect::<Vec<_>>();

        for listener in listeners {
            listener(theme);
        }
    }

    /// Registers a listener called with the new theme after every toggle.
    /// The listener is removed when the returned [`Subscription`] is dropped.
    #[must_use = "the listener is removed when the subscription is dropped"]
    pub fn subscribe(&self, listener: impl Fn(Theme) + 'static) -> Subscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme())
            .field("persistent", &self.is_persistent())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

// ********************
// *** Subscription ***
// ********************

/// Handle to a theme listener.
pub struct Subscription {
    store: Weak<Inner>,
    id: usize,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
#[path = "./theme_test.rs"]
mod theme_test;
