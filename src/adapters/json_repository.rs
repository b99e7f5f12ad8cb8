//! JSON implementation of the value-table repository.
//!
//! The file is one flat object mapping decimal state identities to values:
//!
//! ```text
//! {
//!   "1572": 0.55,
//!   "20416": 1.0
//! }
//! ```

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{Result, error::Error, ports::ValueTableRepository, td_learning::ValueTable};

/// Human-readable value-table storage.
///
/// Floats are written in shortest round-trip form and parsed back exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl JsonRepository {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn persistence_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Persistence {
        path: path.display().to_string(),
        message: message.into(),
    }
}

pub(crate) fn open_table_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => persistence_error(path, "file not found"),
        _ => persistence_error(path, format!("cannot open file: {source}")),
    })
}

impl ValueTableRepository for JsonRepository {
    fn save(&self, table: &ValueTable, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, table).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize value table to JSON".to_string(),
                message: e.to_string(),
            }
        })?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<ValueTable> {
        let file = open_table_file(path)?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| persistence_error(path, format!("corrupt value table: {e}")))
    }
}
