//! Rule-based baseline: win, block, centre, corners, anything

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{Action, LineAnalyzer, Player, Position},
};

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Deterministic opponent that plays the first applicable rule:
/// complete its own line, block the opponent's, take the centre, take a
/// corner, or take the first free cell.
#[derive(Debug, Clone)]
pub struct HeuristicAgent {
    name: String,
    player: Player,
}

impl HeuristicAgent {
    pub fn new(player: Player) -> Self {
        Self {
            name: "Heuristic".to_string(),
            player,
        }
    }

    fn choose_index(position: &Position) -> Option<usize> {
        let cells = &position.board.cells;
        let mover = position.to_move;
        let free = |index: usize| position.board.is_legal(index % 3, index / 3);

        LineAnalyzer::winning_moves(cells, mover)
            .first()
            .copied()
            .or_else(|| LineAnalyzer::winning_moves(cells, mover.opponent()).first().copied())
            .or_else(|| free(CENTER).then_some(CENTER))
            .or_else(|| CORNERS.into_iter().find(|&index| free(index)))
            .or_else(|| (0..9).find(|&index| free(index)))
    }
}

impl Agent for HeuristicAgent {
    fn select_move(&mut self, position: &Position) -> Result<Action> {
        if position.is_terminal() {
            return Err(Error::GameOver);
        }
        let index = Self::choose_index(position).ok_or(Error::NoValidMoves)?;
        Action::new(&position.board, index % 3, index / 3, position.to_move)
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

    fn choose(codes: [u8; 9], first: Player) -> (usize, usize) {
        let position = Position::from_board(BoardState::from_codes(codes), first).unwrap();
        let mut agent = HeuristicAgent::new(position.to_move);
        let action = agent.select_move(&position).unwrap();
        (action.x, action.y)
    }

    #[test]
    fn test_prefers_win_over_block() {
        // X to move with X threatening the top row and O the middle column
        assert_eq!(choose([1, 1, 0, 0, 2, 0, 0, 2, 0], Player::X), (2, 0));
    }

    #[test]
    fn test_blocks_opponent_line() {
        // O to move; X threatens the top row
        assert_eq!(choose([1, 1, 0, 0, 2, 0, 0, 0, 0], Player::X), (2, 0));
    }

    #[test]
    fn test_opening_takes_centre_then_corner() {
        assert_eq!(choose([0; 9], Player::X), (1, 1));
        assert_eq!(choose([0, 0, 0, 0, 1, 0, 0, 0, 0], Player::X), (0, 0));
    }
}
