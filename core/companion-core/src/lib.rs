//! Core library for Companion.
//!
//! Client-side state for a travel-companion app: who is signed in, which
//! experiences exist, and which notifications are on screen. The two durable
//! stores persist to a key-value [`storage::Storage`]; the notification queue
//! lives only in memory.
//!
//! Build one [`AppContext`] at start-up and hand it to consumers.

pub mod config;
pub mod context;
pub mod error;
pub mod experiences;
pub mod ids;
pub mod model;
pub mod seed;
pub mod session;
pub mod storage;
pub mod toast;

pub use config::{load_settings, save_settings, Settings, StorageConfig};
pub use context::AppContext;
pub use error::{ContextError, ModelError, StorageError};
pub use experiences::ExperienceStore;
pub use session::{AuthState, SessionStore};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use toast::ToastQueue;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
