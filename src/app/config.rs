//! Configuration types for learner creation.

use crate::{
    Error, Result,
    td_learning::{DrawPolicy, TieBreak},
};

/// Configuration for creating a temporal-difference learner.
///
/// Builder-style, validated once by [`TdConfig::validate`] before a learner
/// is constructed.
///
/// # Examples
///
/// ```
/// use tictactoe_td::app::TdConfig;
/// use tictactoe_td::td_learning::{DrawPolicy, TieBreak};
///
/// let config = TdConfig::new()
///     .with_learning_rate(0.2)
///     .with_epsilon(0.05)
///     .with_tie_break(TieBreak::First)
///     .with_draw_policy(DrawPolicy::Target(0.5))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TdConfig {
    /// Step size α of the backward update
    pub learning_rate: f64,
    /// Exploration probability ε
    pub epsilon: f64,
    pub tie_break: TieBreak,
    pub draw_policy: DrawPolicy,
    /// Seed unseen immediate wins at 1.0 instead of 0.5
    pub win_prior: bool,
    /// When false the learner never writes its table
    pub learning: bool,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl TdConfig {
    /// Create a configuration with default values:
    /// - α = 0.1, ε = 0.2
    /// - random tie breaking, draws leave the table unchanged
    /// - win prior on, learning on, no seed
    pub fn new() -> Self {
        Self {
            learning_rate: 0.1,
            epsilon: 0.2,
            tie_break: TieBreak::default(),
            draw_policy: DrawPolicy::default(),
            win_prior: true,
            learning: true,
            seed: None,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_draw_policy(mut self, draw_policy: DrawPolicy) -> Self {
        self.draw_policy = draw_policy;
        self
    }

    pub fn with_win_prior(mut self, win_prior: bool) -> Self {
        self.win_prior = win_prior;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Exploit-only configuration for play and evaluation: no exploration,
    /// no table writes.
    pub fn frozen(mut self) -> Self {
        self.learning = false;
        self.epsilon = 0.0;
        self
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if α is outside `(0, 1]`, ε is
    /// outside `[0, 1]` or a draw target is outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!("learning rate must be in (0, 1], got {}", self.learning_rate),
            });
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(Error::InvalidConfiguration {
                message: format!("epsilon must be in [0, 1], got {}", self.epsilon),
            });
        }
        if let DrawPolicy::Target(target) = self.draw_policy
            && !(0.0..=1.0).contains(&target)
        {
            return Err(Error::InvalidConfiguration {
                message: format!("draw target must be in [0, 1], got {target}"),
            });
        }
        Ok(())
    }
}

impl Default for TdConfig {
    fn default() -> Self {
        Self::new()
    }
}
