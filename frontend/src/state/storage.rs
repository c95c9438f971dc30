use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use thiserror::Error;
use web_sys::window;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("failed to read `{0}` from session storage")]
    Read(String),
    #[error("failed to write `{0}` to session storage")]
    Write(String),
}

/// String key/value store scoped to the browser session.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The tab's `sessionStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = window().ok_or(StorageError::Unavailable)?;
        match window.session_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(StorageError::Unavailable),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Quota errors and private-mode restrictions surface here.
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

/// Process-local map. Stands in for `sessionStorage` when the browser
/// refuses access, so values still last until the page is closed.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Session storage, or an in-memory map when the browser has none.
pub fn open_session() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            warn!("{}, falling back to memory", e);
            Rc::new(MemoryStorage::new())
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Store whose every call fails, like storage in a locked-down browser.
    pub struct FailingStorage;

    impl KeyValueStore for FailingStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read(key.to_string()))
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write(key.to_string()))
        }
    }

    /// Reads succeed, writes fail.
    #[derive(Default)]
    pub struct ReadOnlyStorage(pub MemoryStorage);

    impl KeyValueStore for ReadOnlyStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write(key.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k"), Ok(None));
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k"), Ok(Some("v".to_string())));
        storage.set("k", "w").unwrap();
        assert_eq!(storage.get("k"), Ok(Some("w".to_string())));
    }

    #[test]
    fn errors_name_the_key() {
        assert_eq!(
            StorageError::Write("theme".into()).to_string(),
            "failed to write `theme` to session storage"
        );
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "session storage is not available"
        );
    }
}
