use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fuel_core::{KeyValueStore, KeyValueStoreError};

/// String key-value pairs kept in a flat TOML file.
///
/// The whole file is rewritten on every change. An unreadable or corrupt file
/// is treated as empty, so a damaged state file logs the user out instead of
/// preventing startup.
pub struct TomlKeyValueStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl TomlKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path);
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fuel")
            .join("state.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), KeyValueStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(storage_error)?;
        }
        let content = toml::to_string_pretty(entries).map_err(storage_error)?;
        std::fs::write(&self.path, content).map_err(storage_error)
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|content| match toml::from_str(&content) {
            Ok(entries) => Some(entries),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring unreadable state file");
                None
            }
        })
        .unwrap_or_default()
}

fn storage_error(error: impl std::fmt::Display) -> KeyValueStoreError {
    KeyValueStoreError::Storage {
        message: error.to_string(),
    }
}

impl KeyValueStore for TomlKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let entries = self.entries.lock().map_err(storage_error)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let mut entries = self.entries.lock().map_err(storage_error)?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let mut entries = self.entries.lock().map_err(storage_error)?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
