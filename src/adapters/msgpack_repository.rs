//! MessagePack implementation of the value-table repository.
//!
//! Same flat string-keyed map as the JSON adapter, in a compact binary
//! encoding via rmp_serde.

use std::{fs::File, io::BufReader, path::Path};

use super::json_repository::{open_table_file, persistence_error};
use crate::{Result, error::Error, ports::ValueTableRepository, td_learning::ValueTable};

/// MessagePack-based value-table repository.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use tictactoe_td::{adapters::MsgPackRepository, ports::ValueTableRepository, td_learning::ValueTable};
///
/// let repo = MsgPackRepository::new();
/// repo.save(&ValueTable::new(), Path::new("learner.msgpack"))?;
/// let loaded = repo.load(Path::new("learner.msgpack"))?;
/// # Ok::<(), tictactoe_td::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl ValueTableRepository for MsgPackRepository {
    fn save(&self, table: &ValueTable, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        rmp_serde::encode::write(&mut file, table).map_err(|e| Error::SerializationContext {
            operation: "serialize value table to MessagePack".to_string(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<ValueTable> {
        let file = open_table_file(path)?;
        rmp_serde::decode::from_read(BufReader::new(file))
            .map_err(|e| persistence_error(path, format!("corrupt value table: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::tictactoe::StateId;

    #[test]
    fn test_msgpack_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("table.msgpack");

        let table =
            ValueTable::from_entries([(StateId(5), 0.0), (StateId(77), 1.0), (StateId(9), 0.5)])
                .unwrap();

        let repo = MsgPackRepository::new();
        repo.save(&table, &file_path).expect("Failed to save");
        let loaded = repo.load(&file_path).expect("Failed to load");

        assert_eq!(loaded, table);
    }

    #[test]
    fn test_garbage_is_persistence_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("garbage.msgpack");
        std::fs::write(&path, [0xc1, 0x00, 0xff]).unwrap();

        let result = MsgPackRepository::new().load(&path);
        assert!(matches!(result, Err(Error::Persistence { .. })));
    }
}
