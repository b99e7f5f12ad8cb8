//! Tic-Tac-Toe game implementation

pub mod actions;
pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;

pub use actions::{Action, legal_actions};
pub use board::{BoardState, Cell, GameStatus, Player, StateId};
pub use game::{GameOutcome, GameRecord, Outcome, Position};
pub use game_tree::{GameTree, TreeNode};
pub use lines::{LineAnalyzer, WINNING_LINES};
