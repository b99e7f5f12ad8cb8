//! Dependency injection container for the application.
//!
//! The container owns infrastructure dependencies and provides factory
//! methods for learners, so commands never construct adapters themselves.

use std::{path::Path, sync::Arc};

use tracing::info;

use super::config::TdConfig;
use crate::{
    Result,
    adapters::FileRepository,
    ports::ValueTableRepository,
    td_learning::TdLearner,
    tictactoe::Player,
};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```
/// use tictactoe_td::app::{App, TdConfig};
/// use tictactoe_td::tictactoe::Player;
///
/// let app = App::new();
/// let learner = app.create_learner(Player::X, TdConfig::new().with_seed(42))?;
/// assert!(learner.table().is_empty());
/// # Ok::<(), tictactoe_td::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use tictactoe_td::app::App;
/// use tictactoe_td::adapters::InMemoryRepository;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// ```
pub struct App {
    /// Repository for value-table persistence
    repository: Arc<dyn ValueTableRepository + Send + Sync>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with production defaults.
    ///
    /// Uses:
    /// - `FileRepository` (JSON, or MessagePack for `.msgpack` paths)
    /// - No default seed (non-deterministic RNG)
    pub fn new() -> Self {
        Self {
            repository: Arc::new(FileRepository::new()),
            default_seed: None,
        }
    }

    /// Create a builder for constructing app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the value-table repository.
    pub fn repository(&self) -> Arc<dyn ValueTableRepository + Send + Sync> {
        Arc::clone(&self.repository)
    }

    pub fn default_seed(&self) -> Option<u64> {
        self.default_seed
    }

    fn seeded(&self, config: TdConfig) -> TdConfig {
        match (config.seed, self.default_seed) {
            (None, Some(seed)) => config.with_seed(seed),
            _ => config,
        }
    }

    /// Create a learner with an empty table.
    ///
    /// A seed in `config` overrides the container default.
    pub fn create_learner(&self, player: Player, config: TdConfig) -> Result<TdLearner> {
        TdLearner::new(player, self.seeded(config))
    }

    /// Load a trained table and wrap it in a learner.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`](crate::Error::Persistence) if the table
    /// is missing or corrupt. Play mode has no sane untrained fallback, so
    /// callers should abort on this error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    ///
    /// use tictactoe_td::app::{App, TdConfig};
    /// use tictactoe_td::tictactoe::Player;
    ///
    /// let app = App::new();
    /// let learner = app.load_learner(Path::new("learner.json"), Player::O, TdConfig::new().frozen())?;
    /// # Ok::<(), tictactoe_td::Error>(())
    /// ```
    pub fn load_learner(&self, path: &Path, player: Player, config: TdConfig) -> Result<TdLearner> {
        let table = self.repository.load(path)?;
        info!(path = %path.display(), entries = table.len(), "loaded value table");
        TdLearner::with_table(player, table, self.seeded(config))
    }

    /// Save a learner's table.
    pub fn save_learner(&self, learner: &TdLearner, path: &Path) -> Result<()> {
        self.repository.save(learner.table(), path)?;
        info!(path = %path.display(), entries = learner.table().len(), "saved value table");
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing app with custom dependencies.
///
/// Primarily used for testing to inject in-memory repositories and control
/// randomness.
pub struct AppBuilder {
    repository: Option<Arc<dyn ValueTableRepository + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self {
            repository: None,
            default_seed: None,
        }
    }

    /// Set a custom value-table repository.
    pub fn with_repository<R: ValueTableRepository + Send + Sync + 'static>(
        mut self,
        repo: R,
    ) -> Self {
        self.repository = Some(Arc::new(repo));
        self
    }

    /// Set a default random seed for all learners created by this container.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// If no repository was specified, uses `FileRepository` by default.
    pub fn build(self) -> App {
        App {
            repository: self
                .repository
                .unwrap_or_else(|| Arc::new(FileRepository::new())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, adapters::InMemoryRepository, ports::Agent};

    #[test]
    fn test_app_creates_learner() {
        let app = App::new();
        let learner = app.create_learner(Player::O, TdConfig::new()).unwrap();
        assert_eq!(learner.player(), Player::O);
    }

    #[test]
    fn test_app_applies_default_seed() {
        let app = App::for_testing().with_default_seed(42).build();
        let learner = app.create_learner(Player::X, TdConfig::new()).unwrap();
        assert_eq!(learner.config().seed, Some(42));

        let learner = app
            .create_learner(Player::X, TdConfig::new().with_seed(123))
            .unwrap();
        assert_eq!(learner.config().seed, Some(123));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let app = App::new();
        let result = app.create_learner(Player::X, TdConfig::new().with_epsilon(2.0));
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_missing_table_is_persistence_error() {
        let app = App::for_testing()
            .with_repository(InMemoryRepository::new())
            .build();
        let result = app.load_learner(Path::new("missing.json"), Player::X, TdConfig::new());
        assert!(matches!(result, Err(Error::Persistence { .. })));
    }
}
