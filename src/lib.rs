//! Tic-tac-toe agents: temporal-difference value learning and exhaustive minimax
//!
//! This crate provides:
//! - The 3x3 game: boards, legal actions, terminal detection and a state
//!   identity that folds in who opened and who is to move
//! - A tabular TD learner that values post-move states and improves through
//!   play
//! - An exhaustive minimax search used as a ground-truth opponent
//! - Baseline agents (heuristic, random, human at the keyboard)
//! - A game driver, training regimens and value-table persistence
//!
//! # Example
//!
//! ```
//! use tictactoe_td::{
//!     agents::HeuristicAgent,
//!     app::{App, TdConfig},
//!     pipeline::{TrainingConfig, TrainingPipeline},
//!     tictactoe::Player,
//! };
//!
//! let app = App::for_testing().with_default_seed(7).build();
//! let mut learner = app.create_learner(Player::X, TdConfig::new())?;
//! let mut opponent = HeuristicAgent::new(Player::O);
//!
//! let config = TrainingConfig {
//!     num_games: 50,
//!     ..TrainingConfig::default()
//! };
//! let result = TrainingPipeline::new(config).run(&mut learner, &mut opponent)?;
//! assert_eq!(result.total_games, 50);
//! # Ok::<(), tictactoe_td::Error>(())
//! ```

pub mod adapters;
pub mod agents;
pub mod app;
pub mod cli;
pub mod error;
pub mod minimax;
pub mod pipeline;
pub mod ports;
pub mod td_learning;
pub mod tictactoe;

pub use error::{Error, Result};
