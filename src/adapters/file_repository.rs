//! Extension-dispatching file repository.

use std::path::Path;

use super::{JsonRepository, MsgPackRepository};
use crate::{Result, ports::ValueTableRepository, td_learning::ValueTable};

/// Picks MessagePack for `.msgpack`/`.mpk` paths and JSON for everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRepository {
    json: JsonRepository,
    msgpack: MsgPackRepository,
}

impl FileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn for_path(&self, path: &Path) -> &dyn ValueTableRepository {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("msgpack" | "mpk") => &self.msgpack,
            _ => &self.json,
        }
    }
}

impl ValueTableRepository for FileRepository {
    fn save(&self, table: &ValueTable, path: &Path) -> Result<()> {
        self.for_path(path).save(table, path)
    }

    fn load(&self, path: &Path) -> Result<ValueTable> {
        self.for_path(path).load(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::tictactoe::StateId;

    #[test]
    fn test_dispatches_on_extension() {
        let temp_dir = TempDir::new().unwrap();
        let table = ValueTable::from_entries([(StateId(40), 0.25)]).unwrap();
        let repo = FileRepository::new();

        let json_path = temp_dir.path().join("table.json");
        let msgpack_path = temp_dir.path().join("table.msgpack");
        repo.save(&table, &json_path).unwrap();
        repo.save(&table, &msgpack_path).unwrap();

        let json_text = std::fs::read_to_string(&json_path).unwrap();
        assert!(json_text.contains("\"40\": 0.25"));
        assert!(JsonRepository::new().load(&msgpack_path).is_err());

        assert_eq!(repo.load(&json_path).unwrap(), table);
        assert_eq!(repo.load(&msgpack_path).unwrap(), table);
    }
}
