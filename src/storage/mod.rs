//! Session-scoped key/value storage for the bearer token
//!
//! All operations are synchronous; there are no transactions and the last
//! writer wins.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::error::{AppError, AppResult};

/// Synchronous key/value store backing the session.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Process-scoped store; its content disappears with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries().remove(key);
        Ok(())
    }
}

/// One file per key under a session directory.
///
/// The directory plays the role of the browser tab session: clearing it ends
/// the session.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(key))
    }
}

impl TokenStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => {
                let value = content.trim();
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, value)?;
        debug!(path = %path.display(), "stored session entry");
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed session entry");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
