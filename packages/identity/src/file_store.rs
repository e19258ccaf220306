//! # Filesystem-backed key-value storage
//!
//! [`FileStorage`] is the [`KeyValueStorage`] used on desktop to keep the session
//! across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── storage/
//!     └── <key>          # raw value text
//! ```
//!
//! ## Platform data directories
//!
//! The `ui` crate passes `dirs::data_dir()/smis` as the base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/smis/` |
//! | Linux | `~/.local/share/smis/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\smis\` |

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::storage::{KeyValueStorage, StorageError};

/// Filesystem-backed storage, one file per key.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn storage_dir(&self) -> PathBuf {
        self.base.join("storage")
    }

    fn item_path(&self, key: &str) -> PathBuf {
        // Keys are well-known constants; keep them from escaping the directory.
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.storage_dir().join(name)
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.item_path(key)).ok()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(self.storage_dir())?;
        std::fs::write(self.item_path(key), value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.item_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("smis_test_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = temp_base("roundtrip");

        let storage = FileStorage::new(dir.clone());
        storage.set_item("user", r#"{"email":"a@x.com"}"#).unwrap();

        // Re-open from same directory
        let reopened = FileStorage::new(dir.clone());
        assert_eq!(
            reopened.get_item("user").as_deref(),
            Some(r#"{"email":"a@x.com"}"#)
        );

        reopened.remove_item("user").unwrap();
        assert!(storage.get_item("user").is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_missing_key() {
        let dir = temp_base("missing");
        let storage = FileStorage::new(dir.clone());
        assert!(storage.get_item("user").is_none());
        storage.remove_item("user").unwrap();
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_key_cannot_escape_base() {
        let storage = FileStorage::new(PathBuf::from("/tmp/smis"));
        let path = storage.item_path("../../etc/passwd");
        assert!(path.starts_with("/tmp/smis/storage"));
    }
}
