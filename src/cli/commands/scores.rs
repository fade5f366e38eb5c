//! Scores command - Show or reset the saved tic-tac-toe scores

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::JsonFileRepository,
    cli::output::{print_kv, print_section},
    scores::{ScoreStore, Scoreboard, TICTACTOE_SCORES_KEY},
};

#[derive(Parser, Debug)]
#[command(about = "Show or reset saved tic-tac-toe scores")]
pub struct ScoresArgs {
    /// Set every count back to zero
    #[arg(long)]
    pub reset: bool,

    /// Directory holding the score file
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ScoresArgs) -> Result<()> {
    let repository = JsonFileRepository::new(args.data_dir.unwrap_or_else(super::default_data_dir));
    let path = repository.path_for(TICTACTOE_SCORES_KEY);
    let store = ScoreStore::new(repository, TICTACTOE_SCORES_KEY);

    let scores = if args.reset {
        store.reset()?
    } else {
        store.load_or_reset()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
        return Ok(());
    }

    print_section(if args.reset {
        "Scores reset"
    } else {
        "Tic-Tac-Toe scores"
    });
    print_table(&scores);
    print_kv("File", &path.display().to_string());
    Ok(())
}

fn print_table(scores: &Scoreboard) {
    print_kv("X wins", &scores.x_wins.to_string());
    print_kv("O wins", &scores.o_wins.to_string());
    print_kv("Draws", &scores.draws.to_string());
    print_kv("Games", &scores.games().to_string());
}
