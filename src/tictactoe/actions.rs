//! Legal action generation

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{BoardState, Player};
use crate::error::{Error, MoveRejection};

/// A candidate or committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub x: usize,
    pub y: usize,
    pub player: Player,
}

impl Action {
    /// Build an action for a cell that is legal on `board`
    pub fn new(board: &BoardState, x: usize, y: usize, player: Player) -> Result<Self, Error> {
        if x >= 3 || y >= 3 {
            return Err(Error::IllegalMove {
                x,
                y,
                reason: MoveRejection::OutOfRange,
            });
        }
        if !board.is_legal(x, y) {
            return Err(Error::IllegalMove {
                x,
                y,
                reason: MoveRejection::Occupied,
            });
        }
        Ok(Self { x, y, player })
    }

    /// Row-major cell index
    pub fn index(&self) -> usize {
        self.y * 3 + self.x
    }

    /// Board after this action
    pub fn apply(&self, board: &BoardState) -> Result<BoardState, Error> {
        board.apply_move(self.x, self.y, self.player)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.player, self.x, self.y)
    }
}

/// All empty cells as actions for `player`, in row-major order.
///
/// The order is part of the contract: first-match tie breaking and seeded
/// uniform choices both index into this exact sequence.
pub fn legal_actions(board: &BoardState, player: Player) -> Vec<Action> {
    (0..9)
        .filter(|&index| board.cells[index] == super::Cell::Empty)
        .map(|index| Action {
            x: index % 3,
            y: index / 3,
            player,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_nine_actions_in_row_major_order() {
        let actions = legal_actions(&BoardState::new(), Player::X);
        assert_eq!(actions.len(), 9);
        let indices: Vec<usize> = actions.iter().map(Action::index).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
        assert_eq!((actions[1].x, actions[1].y), (1, 0));
        assert_eq!((actions[3].x, actions[3].y), (0, 1));
    }

    #[test]
    fn test_full_board_has_no_actions() {
        let board = BoardState::from_codes([1, 2, 1, 2, 1, 2, 1, 2, 1]);
        assert!(legal_actions(&board, Player::O).is_empty());
    }

    #[test]
    fn test_one_empty_cell() {
        let board = BoardState::from_codes([1, 0, 1, 2, 1, 2, 1, 2, 1]);
        let actions = legal_actions(&board, Player::O);
        assert_eq!(
            actions,
            vec![Action {
                x: 1,
                y: 0,
                player: Player::O
            }]
        );
    }

    #[test]
    fn test_action_new_validates_cell() {
        let board = BoardState::from_codes([1, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(Action::new(&board, 0, 0, Player::O).is_err());
        assert!(Action::new(&board, 5, 0, Player::O).is_err());
        let action = Action::new(&board, 2, 2, Player::O).unwrap();
        assert_eq!(action.index(), 8);
    }
}
