//! Tictactoe command - Interactive tic-tac-toe in the terminal

use std::{
    path::PathBuf,
    sync::mpsc::RecvTimeoutError,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    Error,
    adapters::JsonFileRepository,
    cli::{
        input::{Command, spawn_line_reader},
        output::{format_scores, print_kv, print_section, render_tictactoe},
    },
    config::{GameMode, TicTacToeConfig, load_json},
    pacing::{DeferredMove, TickClock},
    scores::{ScoreStore, TICTACTOE_SCORES_KEY},
    tictactoe::{Difficulty, Game, MoveResult, Player, Tick},
};

const TICK: Duration = Duration::from_secs(1);

/// Remaining seconds at which the countdown is announced
const WARN_AT: [u32; 4] = [10, 3, 2, 1];

#[derive(Parser, Debug)]
#[command(about = "Play tic-tac-toe in the terminal")]
pub struct TicTacToeArgs {
    /// JSON file with a saved configuration; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// hvc (against the computer) or hvh (two humans)
    #[arg(long, short = 'm')]
    pub mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Mark played by the human against the computer (`x` or `o`)
    #[arg(long)]
    pub human: Option<Player>,

    /// Mark that opens each game (`x` or `o`)
    #[arg(long)]
    pub first: Option<Player>,

    /// Seconds per turn
    #[arg(long, conflicts_with = "no_timer")]
    pub turn_seconds: Option<u32>,

    /// Play without a turn countdown
    #[arg(long)]
    pub no_timer: bool,

    /// Pause before the computer moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Directory for the score file
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Random seed for the computer opponent
    #[arg(long)]
    pub seed: Option<u64>,
}

impl TicTacToeArgs {
    /// Layer the flags over the config file, or over the defaults.
    pub fn to_config(&self) -> Result<TicTacToeConfig> {
        let mut config = match &self.config {
            Some(path) => load_json::<TicTacToeConfig>(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => TicTacToeConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(human) = self.human {
            config.human = human;
        }
        if let Some(first) = self.first {
            config.first = Some(first);
        }
        if let Some(seconds) = self.turn_seconds {
            config.turn_seconds = Some(seconds);
        }
        if self.no_timer {
            config.turn_seconds = None;
        }
        if let Some(delay) = self.delay_ms {
            config.opponent_delay_ms = delay;
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn execute(args: TicTacToeArgs) -> Result<()> {
    let config = args.to_config()?;
    let data_dir = args.data_dir.clone().unwrap_or_else(super::default_data_dir);
    let store = ScoreStore::new(JsonFileRepository::new(data_dir), TICTACTOE_SCORES_KEY);

    let game = match args.seed {
        Some(seed) => Game::with_seed(config, seed)?,
        None => Game::new(config)?,
    };
    let mut session = Session {
        opponent: DeferredMove::new(game.config().opponent_delay()),
        clock: TickClock::new(TICK, Instant::now()),
        game: game.with_scores(store.load_or_reset()),
        store,
    };

    print_section("Tic-Tac-Toe");
    print_kv("Mode", &session.game.config().mode.to_string());
    if session.game.config().mode == GameMode::HumanVsComputer {
        print_kv("Difficulty", &session.game.config().difficulty.to_string());
        print_kv("You play", &session.game.config().human.to_string());
    }
    print_kv("Scores", &format_scores(&session.game.scores()));
    print_help();

    session.start_turn(Instant::now());
    session.run()
}

fn print_help() {
    println!("\nEnter 1-9 to mark a cell, r to restart, s for scores, q to quit.");
}

struct Session {
    game: Game,
    opponent: DeferredMove,
    /// Beat for the turn countdown, realigned whenever a turn starts
    clock: TickClock,
    store: ScoreStore<JsonFileRepository>,
}

impl Session {
    fn run(&mut self) -> Result<()> {
        let lines = spawn_line_reader();

        loop {
            let now = Instant::now();
            let mut wait = self.clock.remaining(now);
            if let Some(remaining) = self.opponent.remaining(now) {
                wait = wait.min(remaining);
            }

            match lines.recv_timeout(wait) {
                Ok(line) => match Command::parse(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Restart) => {
                        self.game.restart();
                        self.start_turn(Instant::now());
                    }
                    Some(Command::Scores) => println!("{}", format_scores(&self.game.scores())),
                    Some(Command::Help) => print_help(),
                    Some(Command::Move(text)) => self.human_move(&text)?,
                    None => {}
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            let now = Instant::now();
            if self.opponent.poll(now) {
                let result = self.game.play_opponent_move()?;
                self.report(&result);
            }
            if self.clock.poll(now) {
                self.tick();
            }
        }

        log::info!("leaving tic-tac-toe with {:?}", self.game.scores());
        Ok(())
    }

    /// Show the board, restart the countdown beat and arm the opponent if it
    /// moves next.
    fn start_turn(&mut self, now: Instant) {
        self.opponent.cancel();
        self.clock.reset(now);
        println!("\n{}", render_tictactoe(self.game.board()));
        if self.game.is_computer_turn() {
            self.opponent.schedule(now);
        } else {
            println!("{} to move", self.game.to_move());
        }
    }

    fn human_move(&mut self, text: &str) -> Result<()> {
        if self.game.is_computer_turn() || self.opponent.is_pending() {
            println!("Wait for the computer.");
            return Ok(());
        }

        let Some(position) = text
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=9).contains(n))
        else {
            println!("Enter a cell number from 1 to 9.");
            return Ok(());
        };

        let mark = self.game.to_move();
        match self.game.apply_cell_selection(position - 1, mark) {
            Ok(result) => {
                self.report(&result);
                Ok(())
            }
            Err(err) if err.is_rejected_move() => {
                println!("That cell is taken.");
                Ok(())
            }
            Err(Error::GameOver) => {
                println!("Game over. Press r to play again.");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn report(&mut self, result: &MoveResult) {
        println!("{} takes cell {}", result.mark, result.position + 1);
        match result.outcome {
            Some(outcome) => {
                println!("\n{}", render_tictactoe(self.game.board()));
                self.finish(&outcome.to_string());
            }
            None => self.start_turn(Instant::now()),
        }
    }

    fn tick(&mut self) {
        match self.game.tick() {
            Tick::Remaining(seconds) if WARN_AT.contains(&seconds) => {
                println!("{} has {seconds}s left", self.game.to_move());
            }
            Tick::Expired => {
                self.opponent.cancel();
                if let Some(outcome) = self.game.outcome() {
                    self.finish(&outcome.to_string());
                }
            }
            _ => {}
        }
    }

    fn finish(&mut self, message: &str) {
        println!("{message}");
        println!("{}", format_scores(&self.game.scores()));
        println!("Press r to play again or q to quit.");
        if let Err(err) = self.store.save(&self.game.scores()) {
            log::warn!("could not save scores: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> TicTacToeArgs {
        let mut argv = vec!["tictactoe"];
        argv.extend_from_slice(args);
        TicTacToeArgs::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).to_config().unwrap();
        assert_eq!(config, TicTacToeConfig::default());
    }

    #[test]
    fn test_flags_override() {
        let config = parse(&["--mode", "hvh", "--first", "o", "--no-timer"])
            .to_config()
            .unwrap();
        assert_eq!(config.mode, GameMode::HumanVsHuman);
        assert_eq!(config.first_mover(), Player::O);
        assert_eq!(config.turn_seconds, None);
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let argv = ["tictactoe", "--difficulty", "impossible"];
        assert!(TicTacToeArgs::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ttt.json");
        std::fs::write(&path, r#"{"difficulty":"easy","human":"o"}"#).unwrap();

        let config = parse(&["--config", path.to_str().unwrap(), "--difficulty", "medium"])
            .to_config()
            .unwrap();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.human, Player::O);
        assert_eq!(config.first_mover(), Player::O);
    }

    #[test]
    fn test_zero_turn_seconds_rejected() {
        assert!(parse(&["--turn-seconds", "0"]).to_config().is_err());
    }
}
