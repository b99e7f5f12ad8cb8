//! Evaluate command - measure a frozen learner against a fixed opponent

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    app::{App, TdConfig},
    cli::{
        config::{CommonArgs, parse_opponent_token, parse_player_token},
        output::{format_number, print_kv, print_result, print_section},
    },
    pipeline::{ProgressObserver, TrainingConfig, TrainingPipeline, TrainingResult},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a trained learner")]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Opponent to evaluate against (minimax, random, heuristic, fresh-td)
    #[arg(long, short = 'o', default_value = "minimax")]
    pub opponent: String,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Which token the evaluated learner controls (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub agent_player: String,

    /// Which token makes the first move (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first_player: String,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Export results to file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct EvaluationExport<'a> {
    model: String,
    opponent: &'a str,
    agent_player: String,
    first_player: String,
    #[serde(flatten)]
    result: &'a TrainingResult,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let agent_player = parse_player_token(&args.agent_player, "--agent-player")?;
    let first_player = parse_player_token(&args.first_player, "--first-player")?;
    let opponent_type = parse_opponent_token(&args.opponent)?;

    let app = App::new();
    let mut learner = app
        .load_learner(&args.common.model, agent_player, TdConfig::new().frozen())
        .with_context(|| {
            format!(
                "cannot evaluate without a trained value table at {}",
                args.common.model.display()
            )
        })?;

    print_section("Evaluation");
    print_kv("Model", &args.common.model.display().to_string());
    print_kv("Entries", &format_number(learner.table().len()));
    print_kv("Opponent", opponent_type.name());
    print_kv(
        "Seats",
        &format!("learner {agent_player}, first move {first_player}"),
    );

    let config = TrainingConfig {
        num_games: args.games,
        seed: args.common.seed,
        agent_player,
        first_player,
    };
    let mut pipeline = TrainingPipeline::new(config);
    if !args.no_progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = pipeline.run_against(&mut learner, opponent_type)?;

    print_section("Evaluation Results");
    print_result(&result);

    if let Some(path) = &args.export {
        let export = EvaluationExport {
            model: args.common.model.display().to_string(),
            opponent: opponent_type.name(),
            agent_player: agent_player.to_string(),
            first_player: first_player.to_string(),
            result: &result,
        };
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &export)?;
        println!("\n✓ Results exported to: {}", path.display());
    }

    Ok(())
}
