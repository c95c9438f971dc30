use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, info, warn};
use thiserror::Error;

use super::storage::KeyValueStore;
use super::subscription::{Subscribers, Subscription};
use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Picks the light or dark variant of a class list.
    pub fn pick<'a>(self, light: &'a str, dark: &'a str) -> &'a str {
        match self {
            Theme::Light => light,
            Theme::Dark => dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme `{0}`")]
pub struct ThemeParseError(String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

struct ThemeInner {
    current: Cell<Theme>,
    // `None` once storage has failed: the store keeps working in memory.
    storage: RefCell<Option<Rc<dyn KeyValueStore>>>,
    listeners: Subscribers<Theme>,
}

/// Owner of the active theme. Cloning shares the same store.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<ThemeInner>,
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ThemeStore {
    /// Reads the persisted preference. A missing or unparsable value yields
    /// the default theme; a storage error switches to memory-only mode.
    pub fn init(storage: Option<Rc<dyn KeyValueStore>>) -> Self {
        let mut initial = config::DEFAULT_THEME;
        let storage = storage.and_then(|storage| match storage.get(config::THEME_KEY) {
            Ok(Some(raw)) => {
                match raw.parse::<Theme>() {
                    Ok(theme) => initial = theme,
                    Err(e) => warn!("Ignoring persisted theme: {}", e),
                }
                Some(storage)
            }
            Ok(None) => Some(storage),
            Err(e) => {
                warn!("Theme preference unavailable, keeping it in memory: {}", e);
                None
            }
        });

        info!("Theme initialised to {}", initial);
        Self {
            inner: Rc::new(ThemeInner {
                current: Cell::new(initial),
                storage: RefCell::new(storage),
                listeners: Subscribers::new(),
            }),
        }
    }

    pub fn get(&self) -> Theme {
        self.inner.current.get()
    }

    pub fn toggle(&self) -> Theme {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    /// Persists and notifies only when the value actually changes.
    pub fn set(&self, theme: Theme) {
        if theme != self.get() {
            self.apply(theme);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&Theme) + 'static) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }

    /// False once a storage failure forced memory-only mode.
    #[cfg(test)]
    pub fn is_persistent(&self) -> bool {
        self.inner.storage.borrow().is_some()
    }

    fn apply(&self, theme: Theme) {
        self.inner.current.set(theme);
        self.persist(theme);
        debug!("Theme changed to {}", theme);
        self.inner.listeners.notify(&theme);
    }

    fn persist(&self, theme: Theme) {
        let failed = match self.inner.storage.borrow().as_ref() {
            Some(store) => store.set(config::THEME_KEY, theme.as_str()).err(),
            None => None,
        };
        if let Some(e) = failed {
            warn!("Could not persist theme, keeping it in memory: {}", e);
            *self.inner.storage.borrow_mut() = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::storage::testing::{FailingStorage, ReadOnlyStorage};
    use crate::state::storage::MemoryStorage;

    fn session() -> Rc<MemoryStorage> {
        Rc::new(MemoryStorage::new())
    }

    #[test]
    fn defaults_to_light_without_preference() {
        let store = ThemeStore::init(Some(session()));
        assert_eq!(store.get(), Theme::Light);
        assert!(store.is_persistent());
    }

    #[test]
    fn toggle_parity() {
        let store = ThemeStore::init(Some(session()));
        for n in 1..=9 {
            let theme = store.toggle();
            let expected = if n % 2 == 0 { Theme::Light } else { Theme::Dark };
            assert_eq!(theme, expected);
            assert_eq!(store.get(), expected);
        }
    }

    #[test]
    fn double_toggle_returns_to_original() {
        let store = ThemeStore::init(Some(session()));
        let original = store.get();
        store.toggle();
        store.toggle();
        assert_eq!(store.get(), original);
    }

    #[test]
    fn dark_survives_reload() {
        let storage = session();
        let store = ThemeStore::init(Some(storage.clone()));
        assert_eq!(store.get(), Theme::Light);
        store.toggle();
        drop(store);

        let reloaded = ThemeStore::init(Some(storage));
        assert_eq!(reloaded.get(), Theme::Dark);
    }

    #[test]
    fn new_session_starts_from_default() {
        let first = session();
        ThemeStore::init(Some(first.clone())).toggle();
        first.set(config::SPLASH_SEEN_KEY, "true").unwrap();
        assert_eq!(first.get(config::THEME_KEY), Ok(Some("dark".to_string())));

        // Closing the tab discards the whole session store.
        let next = ThemeStore::init(Some(session()));
        assert_eq!(next.get(), Theme::Light);
    }

    #[test]
    fn invalid_persisted_value_falls_back_to_default() {
        let storage = session();
        storage.set(config::THEME_KEY, "sepia").unwrap();
        let store = ThemeStore::init(Some(storage.clone()));
        assert_eq!(store.get(), Theme::Light);

        store.toggle();
        assert_eq!(storage.get(config::THEME_KEY), Ok(Some("dark".to_string())));
    }

    #[test]
    fn unreadable_storage_keeps_theme_in_memory() {
        let store = ThemeStore::init(Some(Rc::new(FailingStorage)));
        assert_eq!(store.get(), Theme::Light);
        assert!(!store.is_persistent());
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn write_failure_degrades_without_losing_the_change() {
        let storage = ReadOnlyStorage::default();
        let store = ThemeStore::init(Some(Rc::new(storage)));
        assert!(store.is_persistent());

        assert_eq!(store.toggle(), Theme::Dark);
        assert!(!store.is_persistent());
        assert_eq!(store.toggle(), Theme::Light);
    }

    #[test]
    fn subscribers_observe_every_change() {
        let store = ThemeStore::init(None);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            store.subscribe(move |theme| seen.borrow_mut().push(*theme))
        };

        store.toggle();
        store.set(Theme::Dark);
        store.set(Theme::Light);

        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn subscriber_reads_new_value_during_notification() {
        let store = ThemeStore::init(None);
        let observed = Rc::new(Cell::new(None));
        let _sub = {
            let reader = store.clone();
            let observed = observed.clone();
            store.subscribe(move |_| observed.set(Some(reader.get())))
        };
        store.toggle();
        assert_eq!(observed.get(), Some(Theme::Dark));
    }

    #[test]
    fn parses_persisted_strings() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark!".parse::<Theme>().is_err());
    }
}
