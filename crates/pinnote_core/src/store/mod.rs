//! Key-value persistence for note state.
//!
//! # Responsibility
//! - Define the string key-value contract the note list persists through.
//! - Provide in-memory and SQLite-backed implementations.
//!
//! # Invariants
//! - `set` overwrites the whole value for a key; there are no partial writes.
//! - A missing key reads back as `None`, never as an error.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite;

pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String key-value storage, modelled on browser local storage.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Replaces the stored value for `key`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

/// Process-local store. Contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryStore};

    #[test]
    fn memory_store_overwrites_whole_value() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("notes").unwrap(), None);

        store.set("notes", "[1]").unwrap();
        store.set("notes", "[]").unwrap();
        assert_eq!(store.get("notes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn mutable_reference_forwards_to_inner_store() {
        fn write_through<S: KeyValueStore>(mut store: S) {
            store.set("k", "v").unwrap();
        }

        let mut store = MemoryStore::new();
        write_through(&mut store);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
