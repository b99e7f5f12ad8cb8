//! Repository port for value-table persistence.

use std::path::Path;

use crate::{Result, td_learning::ValueTable};

/// Port for persisting and loading value tables.
///
/// Implementations must round-trip exactly: `load(save(t)) == t`.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use tictactoe_td::{adapters::JsonRepository, ports::ValueTableRepository, td_learning::ValueTable};
///
/// let repo = JsonRepository::new();
/// repo.save(&ValueTable::new(), Path::new("learner.json"))?;
/// let table = repo.load(Path::new("learner.json"))?;
/// # Ok::<(), tictactoe_td::Error>(())
/// ```
pub trait ValueTableRepository {
    /// Save a table to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be written or serialization fails.
    fn save(&self, table: &ValueTable, path: &Path) -> Result<()>;

    /// Load a table from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`](crate::Error::Persistence) if the file is
    /// missing, unreadable or holds keys or values outside the table's domain.
    fn load(&self, path: &Path) -> Result<ValueTable>;
}
