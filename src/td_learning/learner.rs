//! Temporal-difference learner over post-move state values
//!
//! The learner scores every legal action by the value of the state it leads
//! to, plays ε-greedily, records the states it visited and, once the game
//! ends, pulls each visited state's value toward its successor's.

use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use super::{
    policy::{DrawPolicy, EpsilonGreedy},
    value_table::{DEFAULT_VALUE, ValueTable},
};
use crate::{
    Error, Result,
    app::TdConfig,
    ports::Agent,
    tictactoe::{Action, GameStatus, Outcome, Player, Position, StateId},
};

/// Value seeded for an unseen state that is an immediate win for the mover
pub const WIN_PRIOR: f64 = 1.0;

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// One recorded move of the current episode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryStep {
    pub before: Position,
    pub action: Action,
    pub after: StateId,
}

/// Tabular TD(0) learner.
///
/// Owns its [`ValueTable`] and is the only code that writes to it.
#[derive(Debug, Clone)]
pub struct TdLearner {
    name: String,
    player: Player,
    table: ValueTable,
    config: TdConfig,
    policy: EpsilonGreedy,
    rng: StdRng,
    trajectory: Vec<TrajectoryStep>,
    episodes: usize,
}

impl TdLearner {
    /// Learner with an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `config` fails validation.
    pub fn new(player: Player, config: TdConfig) -> Result<Self> {
        Self::with_table(player, ValueTable::new(), config)
    }

    /// Learner that continues from an existing table.
    pub fn with_table(player: Player, table: ValueTable, config: TdConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            name: "TD learner".to_string(),
            player,
            table,
            policy: EpsilonGreedy::new(config.epsilon, config.tie_break),
            rng: build_rng(config.seed),
            config,
            trajectory: Vec::new(),
            episodes: 0,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Switch seats; the table is shared across both roles.
    pub fn set_player(&mut self, player: Player) {
        self.player = player;
    }

    pub fn table(&self) -> &ValueTable {
        &self.table
    }

    pub fn into_table(self) -> ValueTable {
        self.table
    }

    pub fn config(&self) -> &TdConfig {
        &self.config
    }

    pub fn is_learning(&self) -> bool {
        self.config.learning
    }

    /// Moves recorded so far in the current episode
    pub fn trajectory(&self) -> &[TrajectoryStep] {
        &self.trajectory
    }

    /// Number of completed episodes that updated the table
    pub fn episodes(&self) -> usize {
        self.episodes
    }

    /// Every legal action with the value the learner assigns to it, without
    /// touching the table.
    pub fn action_values(&self, position: &Position) -> Result<Vec<(Action, f64)>> {
        position
            .legal_actions()
            .into_iter()
            .map(|action| {
                let (id, prior) = self.candidate(position, action)?;
                Ok((action, self.table.get(id).unwrap_or(prior)))
            })
            .collect()
    }

    /// Post-move identity and the prior it would be seeded with
    fn candidate(&self, position: &Position, action: Action) -> Result<(StateId, f64)> {
        let mover = position.to_move;
        let after = action.apply(&position.board)?;
        let id = after.identity(position.first_player, mover.opponent());
        let prior = if self.config.win_prior && after.check_terminal() == GameStatus::Win(mover) {
            WIN_PRIOR
        } else {
            DEFAULT_VALUE
        };
        Ok((id, prior))
    }

    /// Apply the terminal update and propagate it backwards.
    ///
    /// The trajectory is drained in every case.
    pub fn finish_episode(&mut self, outcome: Outcome) {
        let trajectory = std::mem::take(&mut self.trajectory);
        if !self.config.learning {
            return;
        }
        let Some(last) = trajectory.last() else {
            return;
        };

        match outcome {
            Outcome::Win => self.table.set(last.after, 1.0),
            Outcome::Lose => self.table.set(last.after, 0.0),
            Outcome::Draw => match self.config.draw_policy {
                DrawPolicy::Unchanged => {}
                DrawPolicy::Target(target) => self.table.set(last.after, target),
            },
        }

        let alpha = self.config.learning_rate;
        for pair in trajectory.windows(2).rev() {
            let (current, next) = (pair[0].after, pair[1].after);
            let value = self.table.value(current);
            let target = self.table.value(next);
            self.table.set(current, value + alpha * (target - value));
        }

        self.episodes += 1;
        debug!(
            player = %self.player,
            ?outcome,
            steps = trajectory.len(),
            entries = self.table.len(),
            "TD update applied"
        );
    }
}

impl Agent for TdLearner {
    fn select_move(&mut self, position: &Position) -> Result<Action> {
        if position.to_move != self.player {
            return Err(Error::WrongTurn {
                expected: self.player,
                got: position.to_move,
            });
        }
        let actions = position.legal_actions();
        if actions.is_empty() {
            return Err(Error::NoValidMoves);
        }

        let mut candidates = Vec::with_capacity(actions.len());
        for &action in &actions {
            let (id, prior) = self.candidate(position, action)?;
            let value = if self.config.learning {
                self.table.seed(id, prior)
            } else {
                self.table.get(id).unwrap_or(prior)
            };
            candidates.push((id, value));
        }

        let values: Vec<f64> = candidates.iter().map(|&(_, value)| value).collect();
        let index = self.policy.choose(&values, &mut self.rng);
        let action = actions[index];
        self.trajectory.push(TrajectoryStep {
            before: *position,
            action,
            after: candidates[index].0,
        });
        Ok(action)
    }

    fn on_game_start(&mut self) -> Result<()> {
        if !self.trajectory.is_empty() {
            debug!(
                player = %self.player,
                steps = self.trajectory.len(),
                "discarding steps of an unfinished game"
            );
            self.trajectory.clear();
        }
        Ok(())
    }

    fn on_win(&mut self) -> Result<()> {
        self.finish_episode(Outcome::Win);
        Ok(())
    }

    fn on_lose(&mut self) -> Result<()> {
        self.finish_episode(Outcome::Lose);
        Ok(())
    }

    fn on_draw(&mut self) -> Result<()> {
        self.finish_episode(Outcome::Draw);
        Ok(())
    }

    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        self.config.seed = Some(seed);
        Ok(())
    }
}
