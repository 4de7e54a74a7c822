//! Key/value flags: the one piece of state that may outlive a store.

use crate::StoreError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Trait for small string flags (e.g. `walletConnected = "true"`).
pub trait FlagStore: Send + Sync {
    fn get_flag(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_flag(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_flag(&self, key: &str) -> Result<(), StoreError>;

    /// `true` only when the flag is present and equals `"true"`.
    fn is_set(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get_flag(key)?.as_deref() == Some("true"))
    }
}

/// Flags held in memory; gone when the process exits.
#[derive(Default)]
pub struct MemoryFlagStore {
    flags: Mutex<BTreeMap<String, String>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get_flag(&self, key: &str) -> Result<Option<String>, StoreError> {
        let flags = self
            .flags
            .lock()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(flags.get(key).cloned())
    }

    fn set_flag(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.flags
            .lock()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_flag(&self, key: &str) -> Result<(), StoreError> {
        self.flags
            .lock()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?
            .remove(key);
        Ok(())
    }
}

/// Flags persisted as a JSON object in a single file.
///
/// The file is read on every lookup and rewritten on every change, so separate
/// processes pointing at the same path see each other's flags.
pub struct FileFlagStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileFlagStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// A store at `<dir>/flags.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join("flags.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| StoreError::Serialization(format!("{}: {e}", self.path.display()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StoreError::Backend(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn write_all(&self, flags: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Backend(format!("failed to create {}: {e}", parent.display()))
                })?;
            }
        }
        let json = serde_json::to_string_pretty(flags)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| {
            StoreError::Backend(format!("failed to write {}: {e}", self.path.display()))
        })
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        let mut flags = self.read_all()?;
        f(&mut flags);
        self.write_all(&flags)
    }
}

impl FlagStore for FileFlagStore {
    fn get_flag(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_flag(&self, key: &str, value: &str) -> Result<(), StoreError> {
        tracing::debug!(key, value, path = %self.path.display(), "writing flag");
        self.update(|flags| {
            flags.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_flag(&self, key: &str) -> Result<(), StoreError> {
        tracing::debug!(key, path = %self.path.display(), "removing flag");
        self.update(|flags| {
            flags.remove(key);
        })
    }
}
