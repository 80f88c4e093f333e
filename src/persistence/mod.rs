//! Scalar key/value persistence
//!
//! The game keeps exactly three values across sessions: best score, last
//! score and difficulty. Each lives in its own slot as plain text.
//!
//! Backends:
//! - `LocalStorage` (browser, wasm32 only)
//! - `MemoryStorage` (native builds and tests)

use std::collections::HashMap;

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
mod local;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// Slot names, shared with earlier releases of the game
pub mod keys {
    pub const BEST_SCORE: &str = "witchcase_bestScore";
    pub const LAST_SCORE: &str = "witchcase_lastScore";
    pub const DIFFICULTY: &str = "witchcase_difficulty";
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend is unavailable")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// A string key/value store that survives across sessions
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: Storage + ?Sized> Storage for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Read a slot, logging and swallowing backend failures
pub fn read_slot(storage: &dyn Storage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

/// Read a numeric slot; missing or unparsable values read as `None`
pub fn read_u64(storage: &dyn Storage, key: &str) -> Option<u64> {
    let raw = read_slot(storage, key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring non-numeric value {:?} in `{}`", raw, key);
            None
        }
    }
}

/// Write a slot. Returns false (after logging) if the backend refused.
pub fn write_slot(storage: &mut dyn Storage, key: &str, value: &str) -> bool {
    match storage.set(key, value) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{}", e);
            false
        }
    }
}

/// In-memory storage for native runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot directly
    pub fn insert(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that refuses everything, like LocalStorage in a locked-down iframe
    struct Unavailable;

    impl Storage for Unavailable {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn test_read_u64_parses_and_trims() {
        let mut storage = MemoryStorage::new();
        storage.insert(keys::BEST_SCORE, " 2400 ");
        assert_eq!(read_u64(&storage, keys::BEST_SCORE), Some(2400));
    }

    #[test]
    fn test_read_u64_rejects_garbage_and_missing() {
        let mut storage = MemoryStorage::new();
        storage.insert(keys::LAST_SCORE, "NaN");
        assert_eq!(read_u64(&storage, keys::LAST_SCORE), None);
        assert_eq!(read_u64(&storage, keys::BEST_SCORE), None);
    }

    #[test]
    fn test_failing_backend_degrades_quietly() {
        let mut storage = Unavailable;
        assert_eq!(read_slot(&storage, keys::DIFFICULTY), None);
        assert!(!write_slot(&mut storage, keys::BEST_SCORE, "100"));
    }

    #[test]
    fn test_error_messages_name_the_key() {
        let err = StorageError::Read {
            key: keys::LAST_SCORE.to_string(),
            reason: "SecurityError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read `witchcase_lastScore`: SecurityError"
        );
    }
}
