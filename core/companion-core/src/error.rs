//! Error types for the state layer.
//!
//! Store mutations never surface storage failures (they are logged and
//! swallowed), so these types only reach callers through the storage helpers,
//! model validation, and the call-site checks in [`crate::context::AppContext`].

use std::path::PathBuf;

use thiserror::Error;

/// Failure talking to durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Keys map to file names, so only `[A-Za-z0-9_-]` is accepted.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Storage I/O failed for key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to persist `{}`: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize value for key `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory backend's lock was poisoned by a panicking writer.
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Validation failures on model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Price level must be 1, 2 or 3 (got {0})")]
    PriceLevel(u8),

    #[error("Unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Roster has {participants} participants but capacity is {capacity}")]
    OverCapacity { participants: u32, capacity: u32 },

    #[error("Participant count {count} does not match {ids} participant ids")]
    RosterMismatch { count: u32, ids: usize },
}

/// Failures of call-site checks that couple the session to other stores.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("No signed-in identity")]
    NotAuthenticated,

    #[error("Experience not found: {0}")]
    NotFound(String),

    #[error("Capacity must leave a spot for the host")]
    NoRoomForHost,

    #[error("Experience {experience_id} is hosted by {host_id}, not {user_id}")]
    NotHost {
        experience_id: String,
        host_id: String,
        user_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_host_message_names_both_parties() {
        let err = ContextError::NotHost {
            experience_id: "exp-1".to_string(),
            host_id: "host-a".to_string(),
            user_id: "user-b".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("host-a"));
        assert!(msg.contains("user-b"));
    }

    #[test]
    fn test_invalid_key_is_quoted() {
        let err = StorageError::InvalidKey("../etc".to_string());
        assert_eq!(err.to_string(), "Invalid storage key: \"../etc\"");
    }
}
