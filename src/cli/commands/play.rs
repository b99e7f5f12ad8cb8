//! Play command - a human against the trained learner

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    agents::HumanAgent,
    app::{App, TdConfig},
    cli::{
        config::{CommonArgs, parse_player_token},
        output::print_final,
    },
    pipeline::GameDriver,
    ports::Agent,
    td_learning::TdLearner,
    tictactoe::{Action, Player, Position},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the trained learner")]
pub struct PlayArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Which token makes the first move (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first_player: String,

    /// Print the learner's value for every candidate move
    #[arg(long, default_value_t = false)]
    pub show_values: bool,
}

/// Frozen learner that can print its move evaluations before moving
struct Opponent {
    learner: TdLearner,
    show_values: bool,
}

impl Agent for Opponent {
    fn select_move(&mut self, position: &Position) -> crate::Result<Action> {
        if self.show_values {
            for (action, value) in self.learner.action_values(position)? {
                println!("  ({}, {}) -> {value:.4}", action.x, action.y);
            }
        }
        let action = self.learner.select_move(position)?;
        println!("{} plays ({}, {})", self.learner.name(), action.x, action.y);
        Ok(action)
    }

    fn on_game_start(&mut self) -> crate::Result<()> {
        self.learner.on_game_start()
    }

    fn player(&self) -> Player {
        self.learner.player()
    }

    fn name(&self) -> &str {
        self.learner.name()
    }
}

/// Run one game with the human on `human` and the learner on the other seat.
pub fn execute(args: PlayArgs, human: Player) -> Result<()> {
    let first_player = parse_player_token(&args.first_player, "--first-player")?;
    let app = App::new();
    let mut config = TdConfig::new().frozen();
    if let Some(seed) = args.common.seed {
        config = config.with_seed(seed);
    }
    let learner = app
        .load_learner(&args.common.model, human.opponent(), config)
        .with_context(|| {
            format!(
                "cannot play without a trained value table at {} (run `train` first)",
                args.common.model.display()
            )
        })?;

    println!("You are {human}, the learner is {}.", human.opponent());
    println!("Enter moves as `x y` with coordinates 0-2 (x is the column).\n");

    let mut opponent = Opponent {
        learner,
        show_values: args.show_values,
    };
    let mut person = HumanAgent::stdio(human);

    let driver = GameDriver::new();
    let record = match human {
        Player::X => driver.play(&mut person, &mut opponent, first_player),
        Player::O => driver.play(&mut opponent, &mut person, first_player),
    }?;

    print_final(&record.final_position()?, record.outcome);
    Ok(())
}
