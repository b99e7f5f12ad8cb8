//! Shared argument types and token parsing for CLI commands

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, ValueEnum};

use crate::{
    app::TdConfig,
    pipeline::OpponentType,
    td_learning::{DrawPolicy, TieBreak},
    tictactoe::Player,
};

/// Default location of the trained value table
pub const DEFAULT_MODEL_PATH: &str = "learner_player.json";

/// Arguments shared by every command that touches a value table
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Value-table file (`.json`, or `.msgpack` for the binary encoding)
    #[arg(long, short = 'm', default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Learner hyperparameters exposed on the command line
#[derive(Args, Debug, Clone)]
pub struct LearnerArgs {
    /// Learning rate α (0, 1]
    #[arg(long, default_value_t = 0.1)]
    pub learning_rate: f64,

    /// Exploration probability ε [0, 1]
    #[arg(long, default_value_t = 0.2)]
    pub epsilon: f64,

    /// How to break ties between equally valued moves
    #[arg(long, value_enum, default_value_t = TieBreakArg::Random)]
    pub tie_break: TieBreakArg,

    /// Terminal value written after a draw (default: leave unchanged)
    #[arg(long)]
    pub draw_target: Option<f64>,

    /// Seed unseen winning moves at 0.5 instead of 1.0
    #[arg(long, default_value_t = false)]
    pub no_win_prior: bool,
}

impl LearnerArgs {
    pub fn to_config(&self, seed: Option<u64>) -> TdConfig {
        let mut config = TdConfig::new()
            .with_learning_rate(self.learning_rate)
            .with_epsilon(self.epsilon)
            .with_tie_break(self.tie_break.into())
            .with_win_prior(!self.no_win_prior);
        if let Some(target) = self.draw_target {
            config = config.with_draw_policy(DrawPolicy::Target(target));
        }
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    /// First best move in row-major order
    First,
    /// Uniform among the best moves
    Random,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::First => TieBreak::First,
            TieBreakArg::Random => TieBreak::Random,
        }
    }
}

pub fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

pub fn parse_opponent_token(value: &str) -> Result<OpponentType> {
    match value.trim().to_ascii_lowercase().as_str() {
        "minimax" | "optimal" => Ok(OpponentType::Minimax),
        "random" => Ok(OpponentType::Random),
        "heuristic" | "defensive" => Ok(OpponentType::Heuristic),
        "fresh-td" | "td" | "learner" => Ok(OpponentType::FreshTd),
        other => Err(anyhow!(
            "Unknown opponent type: '{other}'. Supported: minimax, random, heuristic, fresh-td"
        )),
    }
}
