//! Line input for the interactive games

use std::{
    io::{self, BufRead},
    sync::mpsc::{self, Receiver},
    thread,
};

/// Read stdin on a background thread, one trimmed line per message.
///
/// The channel disconnects when stdin reaches EOF, which the game loops
/// treat as quit.
pub fn spawn_line_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line.trim().to_string()).is_err() {
                break;
            }
        }
    });
    rx
}

/// A line typed during play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    Scores,
    Help,
    /// Anything else, handed to the game to parse as a move
    Move(String),
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        Some(match line.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Command::Quit,
            "r" | "restart" => Command::Restart,
            "s" | "scores" => Command::Scores,
            "h" | "help" | "?" => Command::Help,
            _ => Command::Move(line.to_string()),
        })
    }
}
