//! Training pipeline for learning agents

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{
    driver::GameDriver,
    regimen::{OpponentType, TrainingBlock, TrainingRegimen},
};
use crate::{
    Result,
    ports::{Agent, Observer},
    td_learning::TdLearner,
    tictactoe::{Outcome, Player},
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of games for a single-opponent run
    pub num_games: usize,

    /// Random seed
    pub seed: Option<u64>,

    /// Whether the agent plays as X or O
    pub agent_player: Player,

    /// Which player opens every game
    pub first_player: Player,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_games: 500,
            seed: None,
            agent_player: Player::X,
            first_player: Player::X,
        }
    }
}

/// Result of a training run, from the agent's point of view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total games played
    pub total_games: usize,

    /// Number of wins
    pub wins: usize,

    /// Number of draws
    pub draws: usize,

    /// Number of losses
    pub losses: usize,

    /// Win rate
    pub win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,

    /// Loss rate
    pub loss_rate: f64,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }
}

/// Tally for one block of a regimen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseResult {
    pub block: TrainingBlock,
    pub result: TrainingResult,
}

#[derive(Debug, Default)]
struct Tally {
    wins: usize,
    draws: usize,
    losses: usize,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Lose => self.losses += 1,
        }
    }

    fn finish(self) -> TrainingResult {
        TrainingResult::new(
            self.wins + self.draws + self.losses,
            self.wins,
            self.draws,
            self.losses,
        )
    }
}

/// Runs many games between a learner and its opponents
pub struct TrainingPipeline {
    config: TrainingConfig,
    driver: GameDriver,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            driver: GameDriver::new(),
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Play `num_games` games with `agent` on `agent_player` and `opponent`
    /// on the other seat.
    ///
    /// The same `opponent` value plays every game. Use
    /// [`run_against`](Self::run_against) when the opponent must be rebuilt
    /// between games.
    pub fn run(&mut self, agent: &mut dyn Agent, opponent: &mut dyn Agent) -> Result<TrainingResult> {
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed)?;
            opponent.set_rng_seed(seed.wrapping_add(1))?;
        }

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_games)?;
        }

        let agent_player = self.config.agent_player;
        let mut tally = Tally::default();
        for game_num in 0..self.config.num_games {
            let (x_agent, o_agent): (&mut dyn Agent, &mut dyn Agent) = match agent_player {
                Player::X => (&mut *agent, &mut *opponent),
                Player::O => (&mut *opponent, &mut *agent),
            };
            let record = self.driver.play_observed(
                x_agent,
                o_agent,
                self.config.first_player,
                game_num,
                &mut self.observers,
            )?;
            tally.record(record.outcome.for_player(agent_player));
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = tally.finish();
        info!(
            agent = agent.name(),
            opponent = opponent.name(),
            games = result.total_games,
            wins = result.wins,
            draws = result.draws,
            losses = result.losses,
            "training run complete"
        );
        Ok(result)
    }

    /// Play `num_games` games between `learner` on `agent_player` and an
    /// opponent of type `opponent`, rebuilt before each game when the type
    /// requires it.
    pub fn run_against(
        &mut self,
        learner: &mut TdLearner,
        opponent: OpponentType,
    ) -> Result<TrainingResult> {
        let regimen =
            TrainingRegimen::single(opponent, self.config.num_games, self.config.agent_player);
        let mut phases = self.run_regimen(learner, &regimen)?;
        Ok(phases
            .pop()
            .map(|phase| phase.result)
            .unwrap_or_else(|| TrainingResult::new(0, 0, 0, 0)))
    }

    /// Train `learner` through every block of `regimen` in order.
    ///
    /// The learner switches seats per block and keeps one table throughout.
    /// Game numbers reported to observers run across all blocks.
    pub fn run_regimen(
        &mut self,
        learner: &mut TdLearner,
        regimen: &TrainingRegimen,
    ) -> Result<Vec<PhaseResult>> {
        if let Some(seed) = self.config.seed {
            learner.set_rng_seed(seed)?;
        }

        for observer in &mut self.observers {
            observer.on_training_start(regimen.total_games())?;
        }

        let first_player = self.config.first_player;
        let mut game_num = 0;
        let mut phases = Vec::with_capacity(regimen.blocks.len());

        for (block_idx, block) in regimen.blocks.iter().enumerate() {
            learner.set_player(block.agent_player);
            let opponent_seat = block.agent_player.opponent();
            let seed = self.config.seed;
            let mut opponent = block
                .opponent
                .build(opponent_seat, opponent_seed(seed, block_idx, 0))?;
            let mut tally = Tally::default();

            for game in 0..block.games {
                if game > 0 && block.opponent.fresh_each_game() {
                    opponent = block
                        .opponent
                        .build(opponent_seat, opponent_seed(seed, block_idx, game))?;
                }

                let (x_agent, o_agent): (&mut dyn Agent, &mut dyn Agent) = match block.agent_player
                {
                    Player::X => (&mut *learner, opponent.as_mut()),
                    Player::O => (opponent.as_mut(), &mut *learner),
                };
                let record = self.driver.play_observed(
                    x_agent,
                    o_agent,
                    first_player,
                    game_num,
                    &mut self.observers,
                )?;
                tally.record(record.outcome.for_player(block.agent_player));
                game_num += 1;
            }

            let result = tally.finish();
            info!(
                phase = block_idx + 1,
                opponent = block.opponent.name(),
                seat = %block.agent_player,
                wins = result.wins,
                draws = result.draws,
                losses = result.losses,
                entries = learner.table().len(),
                "training phase complete"
            );
            phases.push(PhaseResult {
                block: *block,
                result,
            });
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(phases)
    }
}

/// Seed for the opponent of game `game` in block `block_idx`
fn opponent_seed(seed: Option<u64>, block_idx: usize, game: usize) -> Option<u64> {
    seed.map(|seed| {
        seed.wrapping_add((block_idx as u64 + 1) << 32)
            .wrapping_add(game as u64)
    })
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        agents::{MinimaxAgent, RandomAgent},
        app::TdConfig,
        td_learning::TieBreak,
        tictactoe::{Action, GameOutcome, Position},
    };

    struct MoveRecorder(Rc<RefCell<Vec<Vec<Action>>>>);

    impl Observer for MoveRecorder {
        fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
            self.0.borrow_mut().push(Vec::new());
            Ok(())
        }

        fn on_move(
            &mut self,
            _game_num: usize,
            _step_num: usize,
            _position: &Position,
            action: Action,
        ) -> Result<()> {
            if let Some(game) = self.0.borrow_mut().last_mut() {
                game.push(action);
            }
            Ok(())
        }

        fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_training_pipeline() {
        let config = TrainingConfig {
            num_games: 10,
            seed: Some(42),
            agent_player: Player::X,
            first_player: Player::X,
        };

        let mut pipeline = TrainingPipeline::new(config);
        let mut agent = RandomAgent::new(Player::X);
        let mut opponent = RandomAgent::new(Player::O);

        let result = pipeline.run(&mut agent, &mut opponent).unwrap();

        assert_eq!(result.total_games, 10);
        assert!(result.wins + result.draws + result.losses == 10);
    }

    #[test]
    fn test_learner_never_beats_minimax() {
        let config = TrainingConfig {
            num_games: 30,
            seed: Some(7),
            agent_player: Player::O,
            first_player: Player::X,
        };
        let mut learner = TdLearner::new(Player::O, TdConfig::new()).unwrap();
        let mut oracle = MinimaxAgent::new(Player::X);

        let result = TrainingPipeline::new(config)
            .run(&mut learner, &mut oracle)
            .unwrap();
        assert_eq!(result.wins, 0);
        assert!(learner.table().len() > 0);
    }

    #[test]
    fn test_regimen_reports_each_phase() {
        let config = TrainingConfig {
            seed: Some(1),
            ..TrainingConfig::default()
        };
        let regimen = TrainingRegimen::new(vec![
            TrainingBlock::new(OpponentType::Random, 20, Player::X),
            TrainingBlock::new(OpponentType::FreshTd, 10, Player::O),
        ]);
        let mut learner = TdLearner::new(Player::X, TdConfig::new()).unwrap();

        let phases = TrainingPipeline::new(config)
            .run_regimen(&mut learner, &regimen)
            .unwrap();

        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].result.total_games, 20);
        assert_eq!(phases[1].result.total_games, 10);
        assert_eq!(learner.player(), Player::O);
        assert_eq!(learner.episodes(), 30);
    }

    #[test]
    fn test_run_against_fresh_learner_rebuilds_it_every_game() {
        let games = Rc::new(RefCell::new(Vec::new()));
        let config = TrainingConfig {
            num_games: 4,
            seed: Some(9),
            ..TrainingConfig::default()
        };
        let frozen = TdConfig::new()
            .with_epsilon(0.0)
            .with_tie_break(TieBreak::First)
            .frozen();
        let mut learner = TdLearner::new(Player::X, frozen).unwrap();

        let result = TrainingPipeline::new(config)
            .with_observer(Box::new(MoveRecorder(Rc::clone(&games))))
            .run_against(&mut learner, OpponentType::FreshTd)
            .unwrap();
        assert_eq!(result.total_games, 4);

        let games = games.borrow();
        assert_eq!(games.len(), 4);
        for (game, moves) in games.iter().enumerate() {
            let mut fresh = OpponentType::FreshTd
                .build(Player::O, opponent_seed(Some(9), 0, game))
                .unwrap();
            let mut replay_learner = TdLearner::new(Player::X, frozen).unwrap();
            let record = GameDriver::new()
                .play(&mut replay_learner, fresh.as_mut(), Player::X)
                .unwrap();
            assert_eq!(&record.moves, moves, "game {game}");
        }
    }
}
