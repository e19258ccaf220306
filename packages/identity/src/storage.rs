//! Key-value storage abstraction behind session persistence.
//!
//! Mirrors the browser's `localStorage` surface: string keys, string values,
//! synchronous calls. Implementations live in sibling modules
//! ([`crate::MemoryStorage`], [`crate::FileStorage`], and `LocalStorage` on web).

use thiserror::Error;

/// Failure to write or remove an entry.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable string-to-string map.
pub trait KeyValueStorage {
    /// Returns `None` when the key is absent or cannot be read.
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
