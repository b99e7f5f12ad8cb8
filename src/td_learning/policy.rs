//! ε-greedy move selection over candidate values

use rand::{Rng, rngs::StdRng};
use serde::{Deserialize, Serialize};

/// Values within this distance of the maximum count as tied
pub const TIE_TOLERANCE: f64 = 1e-4;

/// How to pick among equally valued best actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// First best action in row-major order
    First,
    /// Uniform choice among the best actions
    #[default]
    Random,
}

/// Terminal treatment of the last visited state after a draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum DrawPolicy {
    /// Keep whatever value the state already has
    #[default]
    Unchanged,
    /// Overwrite it with a fixed target in `[0, 1]`
    Target(f64),
}

/// Exploration rate plus tie-breaking rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonGreedy {
    pub epsilon: f64,
    pub tie_break: TieBreak,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64, tie_break: TieBreak) -> Self {
        Self { epsilon, tie_break }
    }

    /// Index into `values` of the chosen candidate.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn choose(&self, values: &[f64], rng: &mut StdRng) -> usize {
        assert!(!values.is_empty(), "no candidates to choose from");

        if self.epsilon > 0.0 && rng.random::<f64>() < self.epsilon {
            return rng.random_range(0..values.len());
        }

        let best_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let best: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value >= best_value - TIE_TOLERANCE)
            .map(|(index, _)| index)
            .collect();

        match self.tie_break {
            TieBreak::First => best[0],
            TieBreak::Random => best[rng.random_range(0..best.len())],
        }
    }
}
