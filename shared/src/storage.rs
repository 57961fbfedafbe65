use std::collections::HashMap;

use thiserror::Error;

use crate::format::{decode_document, encode_document, ShapeRecord};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key/value store the document is autosaved into.
pub trait Storage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Keeps one storage key in step with the document. Failures are logged and
/// never surface to the caller.
pub struct Autosave<S> {
    storage: S,
    key: String,
}

impl<S: Storage> Autosave<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the saved document. Data that cannot be parsed is deleted so the
    /// next start does not trip over it again.
    pub fn load(&mut self) -> Vec<ShapeRecord> {
        let text = match self.storage.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(error) => {
                log::warn!("autosave unavailable: {error}");
                return Vec::new();
            }
        };
        match decode_document(&text) {
            Ok(records) => {
                log::debug!("restored {} shapes from {}", records.len(), self.key);
                records
            }
            Err(error) => {
                log::error!("discarding corrupt autosave {}: {error}", self.key);
                self.remove();
                Vec::new()
            }
        }
    }

    pub fn save(&mut self, records: &[ShapeRecord]) {
        let text = match encode_document(records) {
            Ok(text) => text,
            Err(error) => {
                log::error!("failed to encode autosave: {error}");
                return;
            }
        };
        if let Err(error) = self.storage.set(&self.key, &text) {
            log::warn!("autosave failed: {error}");
        }
    }

    pub fn remove(&mut self) {
        if let Err(error) = self.storage.remove(&self.key) {
            log::warn!("failed to remove autosave {}: {error}", self.key);
        }
    }
}
