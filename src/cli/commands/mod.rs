//! Command implementations for the tictactoe-td CLI

pub mod evaluate;
pub mod play;
pub mod train;
