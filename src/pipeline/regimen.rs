//! Training regimens
//!
//! A regimen is an ordered list of blocks, each a number of games against
//! one opponent type with the learner on a fixed seat. The learner keeps its
//! table across blocks.

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    agents::{HeuristicAgent, MinimaxAgent, RandomAgent},
    app::TdConfig,
    ports::Agent,
    td_learning::TdLearner,
    tictactoe::Player,
};

/// Games per phase of the default regimen
pub const DEFAULT_PHASE_GAMES: usize = 10_000;

/// Opponent type for a training or evaluation block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentType {
    /// Minimax oracle
    Minimax,
    /// Uniform random mover
    Random,
    /// Win/block/centre/corner rules
    Heuristic,
    /// A new, untrained TD learner for every game
    FreshTd,
}

impl OpponentType {
    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            OpponentType::Minimax => "Minimax",
            OpponentType::Random => "Random",
            OpponentType::Heuristic => "Heuristic",
            OpponentType::FreshTd => "Fresh TD learner",
        }
    }

    /// Whether the opponent is rebuilt before every game
    pub fn fresh_each_game(&self) -> bool {
        matches!(self, OpponentType::FreshTd)
    }

    /// Build an opponent seated on `player`
    pub fn build(&self, player: Player, seed: Option<u64>) -> Result<Box<dyn Agent>> {
        let agent: Box<dyn Agent> = match self {
            OpponentType::Minimax => Box::new(MinimaxAgent::new(player)),
            OpponentType::Heuristic => Box::new(HeuristicAgent::new(player)),
            OpponentType::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(player, seed)),
                None => Box::new(RandomAgent::new(player)),
            },
            OpponentType::FreshTd => {
                let mut config = TdConfig::new();
                if let Some(seed) = seed {
                    config = config.with_seed(seed);
                }
                Box::new(TdLearner::new(player, config)?.with_name("Fresh TD learner"))
            }
        };
        Ok(agent)
    }
}

/// A single block of training against a specific opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingBlock {
    pub opponent: OpponentType,
    pub games: usize,
    /// Seat the learner takes for this block
    pub agent_player: Player,
}

impl TrainingBlock {
    pub fn new(opponent: OpponentType, games: usize, agent_player: Player) -> Self {
        Self {
            opponent,
            games,
            agent_player,
        }
    }
}

/// Ordered sequence of training blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRegimen {
    pub blocks: Vec<TrainingBlock>,
}

impl TrainingRegimen {
    pub fn new(blocks: Vec<TrainingBlock>) -> Self {
        Self { blocks }
    }

    /// One block against one opponent
    pub fn single(opponent: OpponentType, games: usize, agent_player: Player) -> Self {
        Self::new(vec![TrainingBlock::new(opponent, games, agent_player)])
    }

    /// Minimax as X, minimax as O, fresh learner as X, fresh learner as O
    pub fn four_phase(games_per_phase: usize) -> Self {
        Self::new(vec![
            TrainingBlock::new(OpponentType::Minimax, games_per_phase, Player::X),
            TrainingBlock::new(OpponentType::Minimax, games_per_phase, Player::O),
            TrainingBlock::new(OpponentType::FreshTd, games_per_phase, Player::X),
            TrainingBlock::new(OpponentType::FreshTd, games_per_phase, Player::O),
        ])
    }

    pub fn total_games(&self) -> usize {
        self.blocks.iter().map(|block| block.games).sum()
    }
}

impl Default for TrainingRegimen {
    fn default() -> Self {
        Self::four_phase(DEFAULT_PHASE_GAMES)
    }
}
