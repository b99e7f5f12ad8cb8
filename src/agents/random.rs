//! Uniform random baseline

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{Action, Player, Position},
};

/// Picks uniformly among the legal moves
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    player: Player,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(player: Player) -> Self {
        Self {
            name: "Random".to_string(),
            player,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create with seed for reproducibility
    pub fn with_seed(player: Player, seed: u64) -> Self {
        Self {
            name: "Random".to_string(),
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, position: &Position) -> Result<Action> {
        let actions = position.legal_actions();
        if actions.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..actions.len());
        Ok(actions[index])
    }

    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_agents_agree() {
        let position = Position::new(Player::X);
        let mut a = RandomAgent::with_seed(Player::X, 5);
        let mut b = RandomAgent::with_seed(Player::X, 5);
        for _ in 0..10 {
            assert_eq!(a.select_move(&position).unwrap(), b.select_move(&position).unwrap());
        }
    }

    #[test]
    fn test_moves_are_legal() {
        let mut agent = RandomAgent::with_seed(Player::O, 9);
        let position = Position::new(Player::X)
            .play(Action {
                x: 0,
                y: 0,
                player: Player::X,
            })
            .unwrap();
        for _ in 0..50 {
            let action = agent.select_move(&position).unwrap();
            assert!(position.board.is_legal(action.x, action.y));
            assert_eq!(action.player, Player::O);
        }
    }
}
