//! Observer port - abstraction for training observation
//!
//! Observers collect data during a run (progress bars, tallies, logs)
//! without the training loop knowing about any output format.

use crate::{
    Result,
    tictactoe::{Action, GameOutcome, Position},
};

/// Observer trait for monitoring training and evaluation runs
///
/// # Event Sequence
///
/// 1. `on_training_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - For each move in the game
///    - `on_game_end(game_num, outcome)`
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```
/// use tictactoe_td::{ports::Observer, tictactoe::GameOutcome};
///
/// struct CountingObserver {
///     games: usize,
/// }
///
/// impl Observer for CountingObserver {
///     fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> tictactoe_td::Result<()> {
///         self.games += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called after a move is chosen and before it is applied.
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _position: &Position,
        _action: Action,
    ) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
