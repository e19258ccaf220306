//! # Session persistence: the durable copy of the identity
//!
//! One well-known key in a [`KeyValueStorage`] holds the JSON-serialised
//! [`Identity`]. The record exists exactly while someone is logged in; the
//! [`IdentityContext`](crate::IdentityContext) keeps it in step on every transition.
//!
//! Stored data can go stale across deployments, so a blob that no longer parses
//! is treated as "no session": [`SessionPersistence::read_session`] logs it and
//! returns `None`. Writes and clears report failures to the caller, which must
//! not treat the transition as persisted. There is no expiry and no signature on
//! the record.

use thiserror::Error;

use crate::models::Identity;
use crate::storage::{KeyValueStorage, StorageError};

/// Storage key used when the configuration does not override it.
pub const DEFAULT_SESSION_KEY: &str = "user";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("malformed session record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
}

/// Reads and writes the single session record.
#[derive(Clone, Debug)]
pub struct SessionPersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> SessionPersistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Persistence under [`DEFAULT_SESSION_KEY`].
    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_SESSION_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Like [`read_session`](Self::read_session) but reports malformed records.
    pub fn try_read_session(&self) -> Result<Option<Identity>, SessionError> {
        match self.storage.get_item(&self.key) {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    pub fn read_session(&self) -> Option<Identity> {
        match self.try_read_session() {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(key = %self.key, "Ignoring stored session: {}", e);
                None
            }
        }
    }

    pub fn write_session(&self, identity: &Identity) -> Result<(), SessionError> {
        let text = serde_json::to_string(identity)?;
        self.storage.set_item(&self.key, &text).map_err(|e| {
            tracing::warn!(key = %self.key, "Failed to write session: {}", e);
            SessionError::from(e)
        })
    }

    pub fn clear_session(&self) -> Result<(), SessionError> {
        self.storage.remove_item(&self.key).map_err(|e| {
            tracing::warn!(key = %self.key, "Failed to clear session: {}", e);
            SessionError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    fn manager() -> Identity {
        Identity::new("a@x.com", "manager")
            .with_password("pw1")
            .with_profile("full_name", "Ada")
    }

    #[test]
    fn test_write_then_read() {
        let session = SessionPersistence::with_default_key(MemoryStorage::new());
        assert!(session.read_session().is_none());

        session.write_session(&manager()).unwrap();
        assert_eq!(session.read_session(), Some(manager()));
    }

    #[test]
    fn test_clear_removes_record() {
        let storage = MemoryStorage::new();
        let session = SessionPersistence::with_default_key(storage.clone());

        session.write_session(&manager()).unwrap();
        assert!(storage.get_item(DEFAULT_SESSION_KEY).is_some());

        session.clear_session().unwrap();
        assert!(storage.get_item(DEFAULT_SESSION_KEY).is_none());
        assert!(session.read_session().is_none());
    }

    #[test]
    fn test_malformed_blob_reads_as_absent() {
        let storage = MemoryStorage::new();
        storage.set_item(DEFAULT_SESSION_KEY, "not json {").unwrap();
        let session = SessionPersistence::with_default_key(storage);

        assert!(matches!(
            session.try_read_session(),
            Err(SessionError::Malformed(_))
        ));
        assert!(session.read_session().is_none());
    }

    #[test]
    fn test_stale_shape_reads_as_absent() {
        // Valid JSON from an older deployment that lacks the email field.
        let storage = MemoryStorage::new();
        storage
            .set_item(DEFAULT_SESSION_KEY, r#"{"username":"ada"}"#)
            .unwrap();
        let session = SessionPersistence::with_default_key(storage);
        assert!(session.read_session().is_none());
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let session = SessionPersistence::new(storage.clone(), "smis-session");

        session.write_session(&manager()).unwrap();
        assert!(storage.get_item("smis-session").is_some());
        assert!(storage.get_item(DEFAULT_SESSION_KEY).is_none());
    }

    /// Storage whose writes always fail.
    struct Rejecting;

    impl KeyValueStorage for Rejecting {
        fn get_item(&self, _: &str) -> Option<String> {
            None
        }

        fn set_item(&self, _: &str, _: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }

        fn remove_item(&self, _: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("storage disabled".to_string()))
        }
    }

    #[test]
    fn test_storage_failures_are_reported() {
        let session = SessionPersistence::with_default_key(Rejecting);
        assert!(matches!(
            session.write_session(&manager()),
            Err(SessionError::Storage(_))
        ));
        assert!(matches!(
            session.clear_session(),
            Err(SessionError::Storage(_))
        ));
    }
}
