//! Durable key-value storage.
//!
//! Each store keeps its whole state as one JSON value under a well-known key.
//! Backends only move strings; (de)serialization and the fall-back-to-default
//! policy live in [`load_or`] and [`save`].
//!
//! # Defensive loading
//!
//! Reads never fail the caller:
//! - Missing key (return default)
//! - Empty value (return default, log warning)
//! - Corrupt JSON (return default, log warning)
//! - Backend error (return default, log warning)

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StorageError, StorageResult};

/// Key holding the session record `{isAuthenticated, user}`.
pub const SESSION_KEY: &str = "workingname_auth";

/// Key holding the experience list.
pub const EXPERIENCES_KEY: &str = "experiences";

pub trait Storage: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    fn write(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Outcome of a defensive load, so callers can tell a restored value from a
/// fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    Stored(T),
    Fallback(T),
}

impl<T> Loaded<T> {
    pub fn into_inner(self) -> T {
        match self {
            Loaded::Stored(v) | Loaded::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Loaded::Fallback(_))
    }
}

/// Reads and parses `key`, falling back to `default()` on any problem.
pub fn load_or<T, F>(storage: &dyn Storage, key: &str, default: F) -> Loaded<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let content = match storage.read(key) {
        Ok(Some(content)) => content,
        Ok(None) => {
            tracing::debug!(key, "Nothing stored, using default");
            return Loaded::Fallback(default());
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read storage, using default");
            return Loaded::Fallback(default());
        }
    };

    if content.trim().is_empty() {
        tracing::warn!(key, "Empty stored value, using default");
        return Loaded::Fallback(default());
    }

    match serde_json::from_str::<T>(&content) {
        Ok(value) => Loaded::Stored(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to parse stored value, using default");
            Loaded::Fallback(default())
        }
    }
}

/// Serializes `value` and writes it under `key`.
pub fn save<T: Serialize + ?Sized>(
    storage: &dyn Storage,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let content = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    storage.write(key, &content)
}

/// Like [`save`], but only logs failures. Store mutations use this: a failed
/// write leaves the in-memory state ahead of storage.
pub(crate) fn save_logged<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) {
    if let Err(e) = save(storage, key, value) {
        tracing::warn!(key, error = %e, "Failed to persist state");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Backend whose reads and writes always fail.
    pub(crate) struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn read(&self, key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }

        fn write(&self, key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_validate_key_accepts_known_keys() {
        assert!(validate_key(SESSION_KEY).is_ok());
        assert!(validate_key(EXPERIENCES_KEY).is_ok());
        assert!(validate_key("a-b_C9").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_paths_and_empty() {
        assert!(validate_key("").is_err());
        assert!(validate_key("../x").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("a.json").is_err());
    }

    #[test]
    fn test_load_missing_key_falls_back() {
        let storage = MemoryStorage::new();
        let loaded = load_or(&storage, "k", || vec![1u32]);
        assert_eq!(loaded, Loaded::Fallback(vec![1]));
    }

    #[test]
    fn test_load_corrupt_value_falls_back() {
        let storage = MemoryStorage::new();
        storage.write("k", "{invalid json}").unwrap();
        let loaded = load_or(&storage, "k", Vec::<u32>::new);
        assert!(loaded.is_fallback());
    }

    #[test]
    fn test_load_empty_value_falls_back() {
        let storage = MemoryStorage::new();
        storage.write("k", "   ").unwrap();
        assert!(load_or(&storage, "k", Vec::<u32>::new).is_fallback());
    }

    #[test]
    fn test_load_read_error_falls_back() {
        let loaded = load_or(&BrokenStorage, "k", || 7u32);
        assert_eq!(loaded, Loaded::Fallback(7));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let storage = MemoryStorage::new();
        save(&storage, "k", &vec![3u32, 4]).unwrap();
        assert_eq!(
            load_or(&storage, "k", Vec::<u32>::new),
            Loaded::Stored(vec![3, 4])
        );
    }

    #[test]
    fn test_save_logged_swallows_write_errors() {
        save_logged(&BrokenStorage, "k", &1u32);
    }
}
