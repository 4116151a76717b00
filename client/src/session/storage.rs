//! # Key-Value Storage Backends
//!
//! Durable string storage under fixed keys, the client's equivalent of a
//! browser's local storage.
//!
//! - [`MemoryStorage`]: process-local map, used by tests and embedders
//! - [`FileStorage`]: a single JSON object file, used by the CLI

use crate::core::error::{AppError, Result};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const CORRUPT_PREFIX: &str = "Corrupt storage file";

/// String-valued key-value storage.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-memory storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.write().remove(key);
        Ok(())
    }
}

/// File-backed storage: every key lives in one JSON object on disk.
///
/// The file is re-read on every access so separate processes sharing the
/// file see each other's writes. There is no cross-process locking; writes
/// go through a temp file and a rename so readers never see a partial file.
/// A corrupt file fails reads but is overwritten by the next write.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Storage file name inside the configured storage directory.
    pub const FILE_NAME: &'static str = "session.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Storage at `<dir>/session.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            AppError::Storage(format!("{} {}: {}", CORRUPT_PREFIX, self.path.display(), e))
        })
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::Storage(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(items)
            .map_err(|e| AppError::Storage(format!("Failed to encode storage: {}", e)))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let write_err = |e: std::io::Error| {
            AppError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(raw.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    /// Current contents for a read-modify-write, plus whether the file must
    /// be rewritten regardless. A corrupt file counts as empty.
    fn read_for_write(&self) -> Result<(BTreeMap<String, String>, bool)> {
        match self.read_all() {
            Ok(items) => Ok((items, false)),
            Err(AppError::Storage(msg)) if msg.starts_with(CORRUPT_PREFIX) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %msg,
                    "Overwriting corrupt storage file"
                );
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let (mut items, _) = self.read_for_write()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let (mut items, corrupt) = self.read_for_write()?;
        if items.remove(key).is_some() || corrupt {
            self.write_all(&items)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        storage.set_item("token", "abc").unwrap();
        assert_eq!(storage.get_item("token").unwrap().as_deref(), Some("abc"));
        storage.remove_item("token").unwrap();
        assert!(storage.get_item("token").unwrap().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("config").join("alignerr");

        FileStorage::in_dir(&nested).set_item("token", "tok123").unwrap();

        let reopened = FileStorage::in_dir(&nested);
        assert_eq!(reopened.get_item("token").unwrap().as_deref(), Some("tok123"));
        assert!(reopened.path().ends_with("session.json"));
    }

    #[test]
    fn test_file_storage_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        assert!(storage.get_item("token").unwrap().is_none());
        storage.remove_item("token").unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_storage_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        fs::write(storage.path(), "not json").unwrap();
        assert!(matches!(storage.get_item("token"), Err(AppError::Storage(_))));
    }

    #[test]
    fn test_file_storage_corrupt_file_accepts_writes() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        fs::write(storage.path(), r#"{"token": "abc"#).unwrap();

        storage.set_item("token", "fresh").unwrap();
        assert_eq!(storage.get_item("token").unwrap().as_deref(), Some("fresh"));

        fs::write(storage.path(), r#"{"token": "abc"#).unwrap();
        storage.remove_item("token").unwrap();
        assert!(storage.get_item("token").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        storage.set_item("token", "a").unwrap();
        storage.set_item("user", "{}").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
