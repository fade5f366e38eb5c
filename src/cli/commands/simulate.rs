//! Simulate command - Computer-vs-computer batches

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, random, rngs::StdRng};
use serde::Serialize;

use crate::{
    arena::{self, Tally},
    cli::output::{create_match_progress, format_percent, print_kv, print_section},
    config::{DEFAULT_DOTS_SIZE, DotsConfig},
    dots, tictactoe,
};

#[derive(Parser, Debug)]
#[command(about = "Play the computer against itself")]
pub struct SimulateArgs {
    #[command(subcommand)]
    pub game: SimulateGame,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100, global = true)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Write the tally to a JSON file
    #[arg(long, global = true)]
    pub export: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum SimulateGame {
    /// Tic-tac-toe between two difficulties
    Tictactoe(TicTacToeMatch),
    /// Dots-and-boxes between two difficulties
    Dots(DotsMatch),
}

#[derive(Args, Debug)]
pub struct TicTacToeMatch {
    /// Difficulty playing X
    #[arg(long, default_value = "hard")]
    pub x: tictactoe::Difficulty,

    /// Difficulty playing O
    #[arg(long, default_value = "easy")]
    pub o: tictactoe::Difficulty,

    /// Mark that opens each game
    #[arg(long, default_value = "x")]
    pub first: tictactoe::Player,
}

#[derive(Args, Debug)]
pub struct DotsMatch {
    /// Cells per side
    #[arg(long, short = 's', default_value_t = DEFAULT_DOTS_SIZE)]
    pub size: usize,

    /// Difficulty playing player 1
    #[arg(long, default_value = "unbeatable")]
    pub one: dots::Difficulty,

    /// Difficulty playing player 2
    #[arg(long, default_value = "greedy")]
    pub two: dots::Difficulty,
}

#[derive(Debug, Serialize)]
struct Report {
    game: &'static str,
    first: String,
    second: String,
    seed: u64,
    tally: Tally,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(random);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tally = Tally::default();
    let pb = create_match_progress(args.games as u64);

    let (game, first, second) = match &args.game {
        SimulateGame::Tictactoe(m) => {
            for _ in 0..args.games {
                tally.record_tictactoe(arena::play_tictactoe(m.x, m.o, m.first, &mut rng)?);
                pb.inc(1);
                pb.set_message(format!("X {} / O {}", tally.first_wins, tally.second_wins));
            }
            ("tictactoe", format!("X ({})", m.x), format!("O ({})", m.o))
        }
        SimulateGame::Dots(m) => {
            DotsConfig::new(m.size).validate()?;
            for _ in 0..args.games {
                let (outcome, _, _) = arena::play_dots(m.size, m.one, m.two, &mut rng)?;
                tally.record_dots(outcome);
                pb.inc(1);
                pb.set_message(format!("P1 {} / P2 {}", tally.first_wins, tally.second_wins));
            }
            (
                "dots",
                format!("Player 1 ({})", m.one),
                format!("Player 2 ({})", m.two),
            )
        }
    };
    pb.finish_with_message("done");

    print_section("Simulation results");
    print_kv("Games", &tally.games().to_string());
    print_kv("Seed", &seed.to_string());
    print_kv(
        &format!("{first} wins"),
        &format!("{} ({})", tally.first_wins, format_percent(tally.first_win_rate())),
    );
    print_kv(
        &format!("{second} wins"),
        &format!("{} ({})", tally.second_wins, format_percent(tally.second_win_rate())),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", tally.draws, format_percent(tally.draw_rate())),
    );

    if let Some(path) = &args.export {
        let report = Report {
            game,
            first,
            second,
            seed,
            tally,
        };
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!("\nExported results to: {}", path.display());
    }

    Ok(())
}
