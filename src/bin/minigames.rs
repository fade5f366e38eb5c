//! Terminal front-end for tic-tac-toe and dots-and-boxes
//!
//! This CLI provides:
//! - Interactive tic-tac-toe with a turn countdown and saved scores
//! - Interactive dots-and-boxes
//! - Score inspection and reset
//! - Computer-vs-computer simulation

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "minigames")]
#[command(version, about = "Tic-tac-toe and dots-and-boxes against the computer", long_about = None)]
struct Cli {
    /// Show debug logging (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play tic-tac-toe
    Tictactoe(minigames::cli::commands::tictactoe::TicTacToeArgs),

    /// Play dots-and-boxes
    Dots(minigames::cli::commands::dots::DotsArgs),

    /// Show or reset saved scores
    Scores(minigames::cli::commands::scores::ScoresArgs),

    /// Play the computer against itself
    Simulate(minigames::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Tictactoe(args) => minigames::cli::commands::tictactoe::execute(args),
        Commands::Dots(args) => minigames::cli::commands::dots::execute(args),
        Commands::Scores(args) => minigames::cli::commands::scores::execute(args),
        Commands::Simulate(args) => minigames::cli::commands::simulate::execute(args),
    }
}
