//! Shared helpers for the integration test suite.

#![allow(dead_code)]

use tictactoe_td::{
    app::TdConfig,
    td_learning::TieBreak,
    tictactoe::{BoardState, Cell},
};

/// Exploit-only learner settings with first-match tie breaking.
pub fn greedy_config() -> TdConfig {
    TdConfig::new()
        .with_epsilon(0.0)
        .with_tie_break(TieBreak::First)
}

/// Every one of the 3^9 cell assignments, valid or not.
pub fn all_boards() -> Vec<BoardState> {
    (0..3usize.pow(9))
        .map(|index| {
            let mut n = index;
            let mut cells = [Cell::Empty; 9];
            for cell in &mut cells {
                *cell = match n % 3 {
                    0 => Cell::Empty,
                    1 => Cell::X,
                    _ => Cell::O,
                };
                n /= 3;
            }
            BoardState::from_cells(cells)
        })
        .collect()
}
