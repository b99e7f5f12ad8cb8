//! Agent port - the capability every player implementation shares
//!
//! The game driver only talks to this trait, so a temporal-difference
//! learner, the minimax oracle, a scripted heuristic and a human at the
//! keyboard are interchangeable in any seat.

use crate::{
    Result,
    tictactoe::{Action, Player, Position},
};

/// A player seated at the board.
///
/// # Examples
///
/// ```
/// use tictactoe_td::{
///     agents::RandomAgent,
///     ports::Agent,
///     tictactoe::{Player, Position},
/// };
///
/// let mut agent = RandomAgent::with_seed(Player::X, 7);
/// let action = agent.select_move(&Position::new(Player::X))?;
/// assert_eq!(action.player, Player::X);
/// # Ok::<(), tictactoe_td::Error>(())
/// ```
pub trait Agent {
    /// Choose a legal action for `position.to_move`.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal move exists or, for interactive agents,
    /// if input can no longer be read.
    fn select_move(&mut self, position: &Position) -> Result<Action>;

    /// Called before the first move of every game, including games that
    /// follow one aborted by an error.
    fn on_game_start(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once when this agent has won the game.
    fn on_win(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once when this agent has lost the game.
    fn on_lose(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once when the game ended without a winner.
    fn on_draw(&mut self) -> Result<()> {
        Ok(())
    }

    /// The mark this agent places.
    fn player(&self) -> Player;

    /// Human readable name, used in logs and summaries.
    fn name(&self) -> &str;

    /// Reseed the agent's random source. Deterministic agents ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
