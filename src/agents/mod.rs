//! Agent variants that implement [`Agent`](crate::ports::Agent)
//!
//! - [`MinimaxAgent`]: exhaustive game-theoretic play, used as ground truth
//! - [`HumanAgent`]: reads `x y` lines from any reader
//! - [`HeuristicAgent`]: fixed rules (win, block, centre, corners)
//! - [`RandomAgent`]: uniform over legal moves
//!
//! The learning agent lives in [`crate::td_learning::TdLearner`].

pub mod heuristic;
pub mod human;
pub mod minimax;
pub mod random;

pub use heuristic::HeuristicAgent;
pub use human::HumanAgent;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
