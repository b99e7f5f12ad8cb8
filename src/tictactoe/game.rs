//! Game context, outcomes and finished-game records

use serde::{Deserialize, Serialize};

use super::{
    actions::{Action, legal_actions},
    board::{BoardState, GameStatus, Player, StateId},
};
use crate::error::Error;

/// A board together with the context folded into its identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub board: BoardState,
    pub first_player: Player,
    pub to_move: Player,
}

impl Position {
    /// Empty board with `first_player` to move
    pub fn new(first_player: Player) -> Self {
        Self {
            board: BoardState::new(),
            first_player,
            to_move: first_player,
        }
    }

    /// Midgame position; the caller is responsible for a consistent turn
    pub fn from_parts(board: BoardState, first_player: Player, to_move: Player) -> Self {
        Self {
            board,
            first_player,
            to_move,
        }
    }

    /// Infer the player to move from mark counts, given who opened
    pub fn from_board(board: BoardState, first_player: Player) -> Result<Self, Error> {
        let opener = board.count(first_player);
        let other = board.count(first_player.opponent());
        let to_move = if opener == other {
            first_player
        } else if opener == other + 1 {
            first_player.opponent()
        } else {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "mark counts ({first_player}={opener}, {}={other}) are impossible when {first_player} opens",
                    first_player.opponent()
                ),
            });
        };
        Ok(Self::from_parts(board, first_player, to_move))
    }

    pub fn status(&self) -> GameStatus {
        self.board.check_terminal()
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Legal actions for the player to move (empty once the game is over)
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }
        legal_actions(&self.board, self.to_move)
    }

    pub fn identity(&self) -> StateId {
        self.board.identity(self.first_player, self.to_move)
    }

    /// Apply the mover's action and pass the turn
    #[must_use = "play returns a new position; the original is unchanged"]
    pub fn play(&self, action: Action) -> Result<Position, Error> {
        if self.is_terminal() {
            return Err(Error::GameOver);
        }
        if action.player != self.to_move {
            return Err(Error::WrongTurn {
                expected: self.to_move,
                got: action.player,
            });
        }
        Ok(Position {
            board: action.apply(&self.board)?,
            first_player: self.first_player,
            to_move: self.to_move.opponent(),
        })
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// `None` while the game is still running
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Win(player) => Some(GameOutcome::Win(player)),
            GameStatus::Draw => Some(GameOutcome::Draw),
        }
    }

    /// The result as seen by `player`
    pub fn for_player(self, player: Player) -> Outcome {
        match self {
            GameOutcome::Win(winner) if winner == player => Outcome::Win,
            GameOutcome::Win(_) => Outcome::Lose,
            GameOutcome::Draw => Outcome::Draw,
        }
    }
}

/// Win, lose or draw relative to one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

/// A complete game with history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub first_player: Player,
    pub moves: Vec<Action>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Every position of the game, starting with the empty board
    ///
    /// # Errors
    ///
    /// Returns error if a recorded move is illegal, which indicates corrupted data.
    pub fn positions(&self) -> Result<Vec<Position>, Error> {
        let mut position = Position::new(self.first_player);
        let mut positions = Vec::with_capacity(self.moves.len() + 1);
        positions.push(position);
        for action in &self.moves {
            position = position.play(*action)?;
            positions.push(position);
        }
        Ok(positions)
    }

    /// Final board of the game
    pub fn final_position(&self) -> Result<Position, Error> {
        self.positions()?
            .last()
            .copied()
            .ok_or(Error::NoValidMoves)
    }
}
