// ============================================================================
// STORAGE - Session and durable key/value stores
// ============================================================================
// Session storage holds the auth token and dies with the tab; local storage
// keeps the last viewed movie and the favorites across reloads.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{window, Storage};

use crate::services::error::StorageError;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Which browser store to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserStorage {
    Session,
    Local,
}

impl BrowserStorage {
    pub fn is_available(&self) -> bool {
        self.storage().is_some()
    }

    fn storage(&self) -> Option<Storage> {
        let win = window()?;
        match self {
            BrowserStorage::Session => win.session_storage().ok()?,
            BrowserStorage::Local => win.local_storage().ok()?,
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|_| StorageError::Write {
            key: key.to_string(),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let storage = self.storage().ok_or(StorageError::Unavailable)?;
        storage.remove_item(key).map_err(|_| StorageError::Write {
            key: key.to_string(),
        })
    }
}

/// In-memory store. Stands in when the browser refuses storage access.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialization {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.set_item(key, &json)
}

/// Missing and unparsable entries both read as `None`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let json = store.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ Ignoring corrupt `{}` in storage: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_basics() {
        let store = MemoryStorage::new();
        assert!(store.is_empty());
        store.set_item("token", "abc").unwrap();
        assert_eq!(store.get_item("token").as_deref(), Some("abc"));
        assert_eq!(store.len(), 1);
        store.remove_item("token").unwrap();
        assert_eq!(store.get_item("token"), None);
        // removing twice is fine
        store.remove_item("token").unwrap();
    }

    #[test]
    fn json_helpers() {
        let store = MemoryStorage::new();
        save_json(&store, "numbers", &vec![1, 2, 3]).unwrap();
        assert_eq!(store.get_item("numbers").as_deref(), Some("[1,2,3]"));
        assert_eq!(load_json::<Vec<u32>>(&store, "numbers"), Some(vec![1, 2, 3]));
        assert_eq!(load_json::<Vec<u32>>(&store, "missing"), None);

        store.set_item("broken", "{not json").unwrap();
        assert_eq!(load_json::<Vec<u32>>(&store, "broken"), None);
    }
}
