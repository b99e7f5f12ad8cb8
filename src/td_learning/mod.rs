//! Temporal-difference learning over post-move states
//!
//! Each state a learner can move into is identified by its
//! [`StateId`](crate::tictactoe::StateId) and carries a value in `[0, 1]`:
//! the learner's estimate of its chance of winning from there. Unseen states
//! read as 0.5.
//!
//! ## Update rule
//!
//! After a game the last recorded state is set to 1.0 on a win, 0.0 on a
//! loss and left to the [`DrawPolicy`] on a draw. Earlier states are then
//! updated back to front:
//!
//! ```text
//! v(s_i) <- clamp(v(s_i) + α (v(s_{i+1}) - v(s_i)), 0, 1)
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use tictactoe_td::{
//!     app::TdConfig,
//!     agents::MinimaxAgent,
//!     pipeline::GameDriver,
//!     td_learning::TdLearner,
//!     tictactoe::Player,
//! };
//!
//! let mut learner = TdLearner::new(Player::X, TdConfig::new().with_seed(42))?;
//! let mut oracle = MinimaxAgent::new(Player::O);
//!
//! let record = GameDriver::new().play(&mut learner, &mut oracle, Player::X)?;
//! assert!(!record.moves.is_empty());
//! assert!(learner.table().len() > 0);
//! # Ok::<(), tictactoe_td::Error>(())
//! ```

pub mod learner;
pub mod policy;
pub mod value_table;

pub use learner::{TdLearner, TrajectoryStep, WIN_PRIOR};
pub use policy::{DrawPolicy, EpsilonGreedy, TIE_TOLERANCE, TieBreak};
pub use value_table::{DEFAULT_VALUE, ValueTable};
