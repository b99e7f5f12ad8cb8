//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::error::{Error, MoveRejection};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Base-3 digit used by the state encoding (0 = empty, 1 = X, 2 = O)
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::X),
            2 => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X is player A (code 1), O is player B (code 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Single bit folded into [`StateId`]
    pub fn bit(self) -> i64 {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// Terminal check result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Win(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Integer key identifying a (board, first player, player to move) tuple.
///
/// Layout: `board_code * 4 + first.bit() * 2 + to_move.bit()`, where
/// `board_code` is the base-3 number whose digit `i` is the code of cell `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub i64);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StateId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(StateId)
    }
}

/// The 3x3 grid, row-major (`index = y * 3 + x`).
///
/// Boards are plain `Copy` values: every move returns a new board and the
/// receiver is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
}

impl BoardState {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Build a board from numeric cell codes (0 = empty, 1 = X, 2 = O).
    ///
    /// # Panics
    ///
    /// Panics if any code is greater than 2.
    pub fn from_codes(codes: [u8; 9]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (cell, code) in cells.iter_mut().zip(codes) {
            *cell = Cell::from_code(code).expect("cell codes must be 0, 1 or 2");
        }
        Self { cells }
    }

    /// Parse a board from 9 cell characters (`.`, `X`, `O`); whitespace and
    /// `|` separators are ignored.
    pub fn from_string(s: &str) -> Result<Self, Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if chars.len() != 9 {
            return Err(Error::MalformedInput {
                input: s.to_string(),
                reason: format!("expected 9 cells, got {}", chars.len()),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::MalformedInput {
                input: s.to_string(),
                reason: format!("invalid character '{c}' at position {i}"),
            })?;
        }
        Ok(Self { cells })
    }

    /// Cell at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * 3 + x]
    }

    /// True iff `(x, y)` is on the board and empty
    pub fn is_legal(&self, x: usize, y: usize) -> bool {
        x < 3 && y < 3 && self.get(x, y) == Cell::Empty
    }

    /// Place `player`'s mark at `(x, y)` and return the resulting board.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, x: usize, y: usize, player: Player) -> Result<BoardState, Error> {
        if x >= 3 || y >= 3 {
            return Err(Error::IllegalMove {
                x,
                y,
                reason: MoveRejection::OutOfRange,
            });
        }
        if self.get(x, y) != Cell::Empty {
            return Err(Error::IllegalMove {
                x,
                y,
                reason: MoveRejection::Occupied,
            });
        }

        let mut next = *self;
        next.cells[y * 3 + x] = player.to_cell();
        Ok(next)
    }

    /// Winner first, then draw on a full board.
    pub fn check_terminal(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            return GameStatus::Win(winner);
        }
        if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// First completed line's owner, in [`WINNING_LINES`](super::WINNING_LINES) order
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::completed_line(&self.cells).and_then(|line| self.cells[line[0]].to_player())
    }

    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Count of `player`'s marks
    pub fn count(&self, player: Player) -> usize {
        let target = player.to_cell();
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Base-3 encoding of the cells (cell `i` contributes `code * 3^i`)
    pub fn encode(&self) -> i64 {
        self.cells
            .iter()
            .rev()
            .fold(0i64, |acc, cell| acc * 3 + i64::from(cell.code()))
    }

    /// Canonical identity of this board in the given game context
    pub fn identity(&self, first_player: Player, to_move: Player) -> StateId {
        StateId(self.encode() * 4 + first_player.bit() * 2 + to_move.bit())
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..3 {
            for x in 0..3 {
                write!(f, " {} ", self.get(x, y).to_char())?;
                if x < 2 {
                    write!(f, "|")?;
                }
            }
            if y < 2 {
                writeln!(f)?;
                writeln!(f, "-----------")?;
            }
        }
        Ok(())
    }
}
