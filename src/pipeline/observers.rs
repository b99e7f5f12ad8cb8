//! Observer implementations for training and evaluation runs
//!
//! Observers collect data during a run without coupling the loop to any
//! output format.

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Action, GameOutcome, Player, Position},
};

/// Progress bar with running X/draw/O tallies
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    draws: usize,
    o_wins: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            x_wins: 0,
            draws: 0,
            o_wins: 0,
        }
    }

    fn tally(&self) -> String {
        format!("X:{} D:{} O:{}", self.x_wins, self.draws, self.o_wins)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Outcome tallies and game lengths
#[derive(Debug, Clone, Default)]
pub struct MetricsObserver {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    total_games: usize,
    move_counts: Vec<usize>,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of games won by `player`
    pub fn win_rate(&self, player: Player) -> f64 {
        let wins = match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        };
        ratio(wins, self.total_games)
    }

    pub fn draw_rate(&self) -> f64 {
        ratio(self.draws, self.total_games)
    }

    /// Mean number of plies per game
    pub fn avg_game_length(&self) -> f64 {
        if self.move_counts.is_empty() {
            return 0.0;
        }
        self.move_counts.iter().sum::<usize>() as f64 / self.move_counts.len() as f64
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_games: self.total_games,
            x_wins: self.x_wins,
            o_wins: self.o_wins,
            draws: self.draws,
            avg_game_length: self.avg_game_length(),
        }
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Snapshot of [`MetricsObserver`] counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub avg_game_length: f64,
}

impl Observer for MetricsObserver {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.move_counts.push(0);
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _position: &Position,
        _action: Action,
    ) -> Result<()> {
        if let Some(last) = self.move_counts.last_mut() {
            *last += 1;
        }
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, outcome: GameOutcome) -> Result<()> {
        self.total_games += 1;
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        Ok(())
    }
}
