//! Train command - build a value table through scheduled play

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    app::App,
    cli::{
        config::{CommonArgs, LearnerArgs, parse_opponent_token, parse_player_token},
        output::{format_number, print_kv, print_result, print_section},
    },
    pipeline::{
        DEFAULT_PHASE_GAMES, PhaseResult, ProgressObserver, TrainingConfig, TrainingPipeline,
        TrainingRegimen,
    },
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Train a TD learner", allow_negative_numbers = true)]
pub struct TrainArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub learner: LearnerArgs,

    /// Games per phase of the default four-phase schedule
    #[arg(long, default_value_t = DEFAULT_PHASE_GAMES)]
    pub games_per_phase: usize,

    /// Train against a single opponent instead (minimax, random, heuristic, fresh-td)
    #[arg(long, short = 'o')]
    pub opponent: Option<String>,

    /// Number of games against `--opponent`
    #[arg(long, short = 'g', default_value_t = 500)]
    pub games: usize,

    /// Seat the learner takes against `--opponent` (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub agent_player: String,

    /// Which token makes the first move (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first_player: String,

    /// Continue from the existing table at `--model`
    #[arg(long, default_value_t = false)]
    pub resume: bool,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct TrainingSummaryFile<'a> {
    model: String,
    entries: usize,
    seed: Option<u64>,
    phases: &'a [PhaseResult],
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let first_player = parse_player_token(&args.first_player, "--first-player")?;
    let regimen = match &args.opponent {
        Some(opponent) => TrainingRegimen::single(
            parse_opponent_token(opponent)?,
            args.games,
            parse_player_token(&args.agent_player, "--agent-player")?,
        ),
        None => TrainingRegimen::four_phase(args.games_per_phase),
    };

    let app = App::new();
    let config = args.learner.to_config(args.common.seed);
    let mut learner = if args.resume {
        app.load_learner(&args.common.model, Player::X, config)
            .with_context(|| format!("cannot resume from {}", args.common.model.display()))?
    } else {
        app.create_learner(Player::X, config)?
    };

    print_section("Training TD learner");
    print_kv("Learning rate", &config.learning_rate.to_string());
    print_kv("Epsilon", &config.epsilon.to_string());
    print_kv("Total games", &format_number(regimen.total_games()));
    if let Some(seed) = args.common.seed {
        print_kv("Seed", &seed.to_string());
    }

    let training = TrainingConfig {
        num_games: regimen.total_games(),
        seed: args.common.seed,
        agent_player: Player::X,
        first_player,
    };
    let mut pipeline = TrainingPipeline::new(training);
    if !args.no_progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }

    let phases = pipeline.run_regimen(&mut learner, &regimen)?;

    for (index, phase) in phases.iter().enumerate() {
        print_section(&format!(
            "Phase {}: as {} vs {}",
            index + 1,
            phase.block.agent_player,
            phase.block.opponent.name()
        ));
        print_result(&phase.result);
    }

    app.save_learner(&learner, &args.common.model)
        .with_context(|| format!("failed to save {}", args.common.model.display()))?;
    println!(
        "\n✓ Learning complete. {} entries written to {}",
        format_number(learner.table().len()),
        args.common.model.display()
    );

    if let Some(path) = &args.summary {
        let summary = TrainingSummaryFile {
            model: args.common.model.display().to_string(),
            entries: learner.table().len(),
            seed: args.common.seed,
            phases: &phases,
        };
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &summary)?;
        println!("✓ Summary written to {}", path.display());
    }

    Ok(())
}
