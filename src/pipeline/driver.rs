//! Single-game driver
//!
//! Seats two agents, alternates turns from the opening player until the
//! board is terminal, then tells each agent how the game ended.

use tracing::{debug, instrument, warn};

use crate::{
    Error, Result,
    ports::{Agent, Observer},
    tictactoe::{GameOutcome, GameRecord, Player, Position},
};

/// Runs one game between two seated agents
#[derive(Debug, Clone, Copy, Default)]
pub struct GameDriver;

impl GameDriver {
    pub fn new() -> Self {
        Self
    }

    /// Play a full game without observers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeatMismatch`] if an agent is seated on the wrong mark,
    /// and propagates any error raised by an agent.
    pub fn play(
        &self,
        x_agent: &mut dyn Agent,
        o_agent: &mut dyn Agent,
        first_player: Player,
    ) -> Result<GameRecord> {
        self.play_observed(x_agent, o_agent, first_player, 0, &mut [])
    }

    /// Play a full game, reporting every move to `observers`.
    #[instrument(skip_all, fields(game = game_num, first = %first_player))]
    pub fn play_observed(
        &self,
        x_agent: &mut dyn Agent,
        o_agent: &mut dyn Agent,
        first_player: Player,
        game_num: usize,
        observers: &mut [Box<dyn Observer>],
    ) -> Result<GameRecord> {
        check_seat(&*x_agent, Player::X)?;
        check_seat(&*o_agent, Player::O)?;

        x_agent.on_game_start()?;
        o_agent.on_game_start()?;
        for observer in observers.iter_mut() {
            observer.on_game_start(game_num)?;
        }

        let mut position = Position::new(first_player);
        let mut moves = Vec::with_capacity(9);

        while !position.is_terminal() {
            let agent: &mut dyn Agent = match position.to_move {
                Player::X => &mut *x_agent,
                Player::O => &mut *o_agent,
            };

            let action = agent.select_move(&position)?;
            if action.player != position.to_move {
                warn!(agent = agent.name(), %action, "agent moved for the wrong player");
                return Err(Error::WrongTurn {
                    expected: position.to_move,
                    got: action.player,
                });
            }

            for observer in observers.iter_mut() {
                observer.on_move(game_num, moves.len(), &position, action)?;
            }

            position = position.play(action)?;
            moves.push(action);
        }

        let outcome = GameOutcome::from_status(position.status())
            .expect("loop only exits on a terminal position");

        match outcome {
            GameOutcome::Win(Player::X) => {
                x_agent.on_win()?;
                o_agent.on_lose()?;
            }
            GameOutcome::Win(Player::O) => {
                o_agent.on_win()?;
                x_agent.on_lose()?;
            }
            GameOutcome::Draw => {
                x_agent.on_draw()?;
                o_agent.on_draw()?;
            }
        }

        for observer in observers.iter_mut() {
            observer.on_game_end(game_num, outcome)?;
        }

        debug!(?outcome, plies = moves.len(), "game finished");

        Ok(GameRecord {
            first_player,
            moves,
            outcome,
        })
    }
}

fn check_seat(agent: &dyn Agent, seat: Player) -> Result<()> {
    if agent.player() == seat {
        return Ok(());
    }
    warn!(agent = agent.name(), %seat, "agent seated on the wrong mark");
    Err(Error::SeatMismatch {
        agent: agent.name().to_string(),
        seat,
        actual: agent.player(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        agents::{MinimaxAgent, RandomAgent},
        pipeline::MetricsObserver,
    };

    #[test]
    fn test_minimax_self_play_is_a_draw() {
        let mut x = MinimaxAgent::new(Player::X);
        let mut o = MinimaxAgent::new(Player::O);
        let record = GameDriver::new().play(&mut x, &mut o, Player::X).unwrap();

        assert_eq!(record.outcome, GameOutcome::Draw);
        assert_eq!(record.moves.len(), 9);
        assert_eq!(record.moves[0].player, Player::X);
    }

    #[test]
    fn test_o_can_open() {
        let mut x = RandomAgent::with_seed(Player::X, 1);
        let mut o = RandomAgent::with_seed(Player::O, 2);
        let record = GameDriver::new().play(&mut x, &mut o, Player::O).unwrap();

        assert_eq!(record.moves[0].player, Player::O);
        let last = record.final_position().unwrap();
        assert_eq!(GameOutcome::from_status(last.status()), Some(record.outcome));
    }

    #[test]
    fn test_seat_mismatch_is_rejected() {
        let mut x = RandomAgent::with_seed(Player::O, 1);
        let mut o = RandomAgent::with_seed(Player::O, 2);
        let err = GameDriver::new().play(&mut x, &mut o, Player::X).unwrap_err();
        assert!(matches!(err, Error::SeatMismatch { seat: Player::X, .. }));
    }

    #[test]
    fn test_observers_see_every_move() {
        let mut x = RandomAgent::with_seed(Player::X, 3);
        let mut o = RandomAgent::with_seed(Player::O, 4);
        let mut observers: Vec<Box<dyn Observer>> = vec![Box::new(MetricsObserver::new())];

        let record = GameDriver::new()
            .play_observed(&mut x, &mut o, Player::X, 0, &mut observers)
            .unwrap();
        assert!(record.moves.len() >= 5);
    }
}
