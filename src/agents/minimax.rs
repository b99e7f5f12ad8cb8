//! Minimax oracle seated as an agent

use std::collections::HashMap;

use crate::{
    Error, Result,
    minimax::Minimax,
    ports::Agent,
    tictactoe::{Action, Player, Position},
};

/// Perfect player backed by [`Minimax`]. Never loses.
///
/// The search is deterministic, so each position's answer is remembered for
/// the lifetime of the agent.
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    name: String,
    player: Player,
    search: Minimax,
    memo: HashMap<Position, Action>,
}

impl MinimaxAgent {
    pub fn new(player: Player) -> Self {
        Self {
            name: "Minimax".to_string(),
            player,
            search: Minimax::new(),
            memo: HashMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, position: &Position) -> Result<Action> {
        if position.is_terminal() {
            return Err(Error::GameOver);
        }
        if let Some(&action) = self.memo.get(position) {
            return Ok(action);
        }
        let (action, _) = self
            .search
            .choose_move(&position.board, position.to_move)
            .ok_or(Error::NoValidMoves)?;
        self.memo.insert(*position, action);
        Ok(action)
    }

    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::BoardState;

    #[test]
    fn test_takes_immediate_win() {
        let board = BoardState::from_codes([1, 1, 0, 0, 2, 0, 0, 0, 2]);
        let position = Position::from_board(board, Player::X).unwrap();
        let mut agent = MinimaxAgent::new(Player::X);

        let action = agent.select_move(&position).unwrap();
        assert_eq!((action.x, action.y), (2, 0));
        assert_eq!(action.player, Player::X);
    }

    #[test]
    fn test_repeated_positions_answer_identically() {
        let mut agent = MinimaxAgent::new(Player::O);
        let position = Position::new(Player::X)
            .play(Action {
                x: 0,
                y: 0,
                player: Player::X,
            })
            .unwrap();

        let first = agent.select_move(&position).unwrap();
        let second = agent.select_move(&position).unwrap();
        assert_eq!(first, second);
        assert_eq!((first.x, first.y), (1, 1));
    }

    #[test]
    fn test_terminal_position_is_rejected() {
        let board = BoardState::from_codes([1, 1, 1, 2, 2, 0, 0, 0, 0]);
        let position = Position::from_parts(board, Player::X, Player::O);
        let mut agent = MinimaxAgent::new(Player::O);
        assert!(matches!(agent.select_move(&position), Err(Error::GameOver)));
    }
}
