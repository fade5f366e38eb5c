//! Dots command - Interactive dots-and-boxes in the terminal

use std::{path::PathBuf, sync::mpsc::RecvTimeoutError, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    Error,
    cli::{
        input::{Command, spawn_line_reader},
        output::{print_kv, print_section, render_dots},
    },
    config::{DotsConfig, GameMode, load_json},
    dots::{Difficulty, Edge, Game, MoveResult, Player},
    pacing::DeferredMove,
};

#[derive(Parser, Debug)]
#[command(about = "Play dots-and-boxes in the terminal")]
pub struct DotsArgs {
    /// JSON file with a saved configuration; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Cells per side (1-10)
    #[arg(long, short = 's')]
    pub size: Option<usize>,

    /// hvc (against the computer) or hvh (two humans)
    #[arg(long, short = 'm')]
    pub mode: Option<GameMode>,

    /// random, greedy or unbeatable
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Pause before the computer moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Random seed for the computer opponent
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DotsArgs {
    /// Layer the flags over the config file, or over the defaults.
    pub fn to_config(&self) -> Result<DotsConfig> {
        let mut config = match &self.config {
            Some(path) => load_json::<DotsConfig>(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => DotsConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(delay) = self.delay_ms {
            config.opponent_delay_ms = delay;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Read an edge typed as `row col`, commas allowed.
pub fn parse_edge(text: &str) -> Option<Edge> {
    let mut parts = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Edge::new(row, col))
}

pub fn execute(args: DotsArgs) -> Result<()> {
    let config = args.to_config()?;
    let game = match args.seed {
        Some(seed) => Game::with_seed(config, seed)?,
        None => Game::new(config)?,
    };
    let mut session = Session {
        opponent: DeferredMove::new(game.config().opponent_delay()),
        game,
    };

    print_section("Dots and Boxes");
    print_kv("Board", &format!("{0}x{0}", session.game.config().size));
    print_kv("Mode", &session.game.config().mode.to_string());
    if session.game.config().mode == GameMode::HumanVsComputer {
        print_kv("Difficulty", &session.game.config().difficulty.to_string());
        print_kv("You play", &Player::One.to_string());
    }
    print_help();

    session.start_turn(Instant::now());
    session.run()
}

fn print_help() {
    println!("\nEnter an edge as `row col` using the grid numbers:");
    println!("even rows hold horizontal edges, odd rows vertical ones.");
    println!("r restarts, q quits.");
}

struct Session {
    game: Game,
    opponent: DeferredMove,
}

impl Session {
    fn run(&mut self) -> Result<()> {
        let lines = spawn_line_reader();

        loop {
            let received = match self.opponent.remaining(Instant::now()) {
                Some(wait) => lines.recv_timeout(wait),
                None => lines.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(line) => match Command::parse(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Restart) => {
                        self.game.restart()?;
                        self.start_turn(Instant::now());
                    }
                    Some(Command::Scores) => self.print_scores(),
                    Some(Command::Help) => print_help(),
                    Some(Command::Move(text)) => self.human_move(&text)?,
                    None => {}
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if self.opponent.poll(Instant::now()) {
                let result = self.game.play_opponent_move()?;
                self.report(&result);
            }
        }
        Ok(())
    }

    fn start_turn(&mut self, now: Instant) {
        self.opponent.cancel();
        println!("\n{}", render_dots(self.game.board()));
        if self.game.is_computer_turn() {
            self.opponent.schedule(now);
        } else if self.game.outcome().is_none() {
            println!("{} to move", self.game.board().current_player());
        }
    }

    fn human_move(&mut self, text: &str) -> Result<()> {
        if self.game.is_computer_turn() {
            println!("Wait for the computer.");
            return Ok(());
        }
        let Some(edge) = parse_edge(text) else {
            println!("Enter an edge as two numbers, e.g. `0 1`.");
            return Ok(());
        };

        match self.game.apply_edge_selection(edge) {
            Ok(result) => {
                self.report(&result);
                Ok(())
            }
            Err(Error::EdgeAlreadyClaimed { .. }) => {
                println!("Edge {edge} is already taken.");
                Ok(())
            }
            Err(Error::InvalidEdge { .. }) => {
                println!("{edge} is not an edge on this board.");
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
        if result.completed.is_empty() {
            println!("{} draws {}", result.player, result.edge);
        } else {
            println!(
                "{} draws {} and completes {} box(es)",
                result.player,
                result.edge,
                result.completed.len()
            );
        }

        self.start_turn(Instant::now());
        if let Some(outcome) = result.outcome {
            self.print_scores();
            println!("{outcome}");
            println!("Press r to play again or q to quit.");
        }
    }

    fn print_scores(&self) {
        let (one, two) = self.game.scores();
        println!("Player 1: {one}  Player 2: {two}");
    }
}
