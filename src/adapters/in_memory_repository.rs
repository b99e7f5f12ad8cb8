//! In-memory value-table repository for testing.
//!
//! Tables are stored as their JSON encoding so that tests exercise the same
//! key and value validation as the file adapters, without touching disk.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use super::json_repository::persistence_error;
use crate::{Result, error::Error, ports::ValueTableRepository, td_learning::ValueTable};

/// In-memory repository for testing.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use tictactoe_td::{adapters::InMemoryRepository, ports::ValueTableRepository, td_learning::ValueTable};
///
/// let repo = InMemoryRepository::new();
/// repo.save(&ValueTable::new(), Path::new("learner.json"))?;
/// assert!(repo.contains(Path::new("learner.json")));
/// # Ok::<(), tictactoe_td::Error>(())
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the number of tables currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    /// Clear all stored tables.
    pub fn clear(&self) {
        self.storage().clear();
    }

    /// Check if a table exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(&key(path))
    }

    /// Store raw bytes under `path`, bypassing serialization.
    pub fn insert_raw(&self, path: &Path, bytes: impl Into<Vec<u8>>) {
        self.storage().insert(key(path), bytes.into());
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl ValueTableRepository for InMemoryRepository {
    fn save(&self, table: &ValueTable, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec(table).map_err(|e| Error::SerializationContext {
            operation: "serialize value table for in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        self.storage().insert(key(path), bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<ValueTable> {
        let storage = self.storage();
        let bytes = storage
            .get(&key(path))
            .ok_or_else(|| persistence_error(path, "no table stored at this key"))?;

        serde_json::from_slice(bytes)
            .map_err(|e| persistence_error(path, format!("corrupt value table: {e}")))
    }
}
