//! Exhaustive minimax search
//!
//! The full tree below any position is at most 549,946 nodes, so the search
//! runs without depth limit, pruning or caching. It is deterministic and
//! never reads or writes a value table.

use crate::tictactoe::{Action, BoardState, GameStatus, Player, legal_actions};

/// Value of a won position for the evaluating player
pub const WIN: i32 = 1;
/// Value of a drawn position
pub const DRAW: i32 = 0;
/// Value of a lost position for the evaluating player
pub const LOSS: i32 = -1;

/// Game-theoretic search from a fixed player's point of view
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Minimax {
    pub fn new() -> Self {
        Self
    }

    /// Value of `board` for `player`.
    ///
    /// `maximizing` is true when `player` places the next mark and false when
    /// the opponent does.
    pub fn evaluate(&self, board: &BoardState, player: Player, maximizing: bool) -> i32 {
        match board.check_terminal() {
            GameStatus::Win(winner) if winner == player => return WIN,
            GameStatus::Win(_) => return LOSS,
            GameStatus::Draw => return DRAW,
            GameStatus::InProgress => {}
        }

        let mover = if maximizing { player } else { player.opponent() };
        let children = legal_actions(board, mover).into_iter().map(|action| {
            let child = action
                .apply(board)
                .expect("legal action generation should not fail");
            self.evaluate(&child, player, !maximizing)
        });

        if maximizing {
            children.max().expect("in-progress boards have an empty cell")
        } else {
            children.min().expect("in-progress boards have an empty cell")
        }
    }

    /// Every legal move for `player` with its value one ply down
    pub fn scored_moves(&self, board: &BoardState, player: Player) -> Vec<(Action, i32)> {
        legal_actions(board, player)
            .into_iter()
            .map(|action| {
                let child = action
                    .apply(board)
                    .expect("legal action generation should not fail");
                (action, self.evaluate(&child, player, false))
            })
            .collect()
    }

    /// Best move for `player`; ties keep the first move in row-major order.
    ///
    /// Returns `None` when the board has no empty cell.
    pub fn choose_move(&self, board: &BoardState, player: Player) -> Option<(Action, i32)> {
        let mut best: Option<(Action, i32)> = None;
        for (action, value) in self.scored_moves(board, player) {
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((action, value));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_values() {
        let minimax = Minimax::new();
        let x_won = BoardState::from_codes([1, 1, 1, 2, 2, 0, 0, 0, 0]);
        assert_eq!(minimax.evaluate(&x_won, Player::X, false), WIN);
        assert_eq!(minimax.evaluate(&x_won, Player::O, true), LOSS);

        let drawn = BoardState::from_codes([1, 2, 1, 1, 2, 2, 2, 1, 1]);
        assert_eq!(minimax.evaluate(&drawn, Player::X, true), DRAW);
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X .
        // . O .
        // . . O
        let board = BoardState::from_codes([1, 1, 0, 0, 2, 0, 0, 0, 2]);
        let (action, value) = Minimax::new().choose_move(&board, Player::X).unwrap();
        assert_eq!((action.x, action.y), (2, 0));
        assert_eq!(value, WIN);
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // X X .
        // . . .
        // . . O
        // O to move must block at (2, 0) or lose.
        let board = BoardState::from_codes([1, 1, 0, 0, 0, 0, 0, 0, 2]);
        let minimax = Minimax::new();
        let (action, value) = minimax.choose_move(&board, Player::O).unwrap();
        assert_eq!((action.x, action.y), (2, 0));
        assert!(value >= DRAW);

        for (other, other_value) in minimax.scored_moves(&board, Player::O) {
            if other != action {
                assert_eq!(other_value, LOSS, "{other} should lose");
            }
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = BoardState::from_codes([1, 2, 1, 1, 2, 2, 2, 1, 1]);
        assert!(Minimax::new().choose_move(&board, Player::X).is_none());
    }
}
