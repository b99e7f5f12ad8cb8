//! tictactoe-td CLI - train, play against and evaluate a TD tic-tac-toe learner
//!
//! Modes:
//! - `train`: four-phase schedule (or a single opponent) and save the table
//! - `play-x` / `play-o`: a human plays X or O against the frozen learner
//! - `evaluate`: frozen learner against minimax, heuristic or random play

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_td::{cli::commands, tictactoe::Player};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe-td")]
#[command(version, about = "Temporal-difference tic-tac-toe learner", long_about = None)]
struct Cli {
    /// Log learner updates and game results to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the learner and save its value table
    Train(Box<commands::train::TrainArgs>),

    /// Play as X against the trained learner
    #[command(alias = "playX")]
    PlayX(commands::play::PlayArgs),

    /// Play as O against the trained learner
    #[command(alias = "playO")]
    PlayO(commands::play::PlayArgs),

    /// Evaluate the trained learner against a fixed opponent
    Evaluate(commands::evaluate::EvaluateArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Train(args) => commands::train::execute(*args),
        Commands::PlayX(args) => commands::play::execute(args, Player::X),
        Commands::PlayO(args) => commands::play::execute(args, Player::O),
        Commands::Evaluate(args) => commands::evaluate::execute(args),
    }
}
