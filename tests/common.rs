//! Shared helpers for the integration tests.

#![allow(dead_code)]

use minigames::{
    config::{GameMode, TicTacToeConfig},
    tictactoe::{Difficulty, Game, Player},
};

/// A human-vs-computer game with no countdown and no opponent delay
pub fn computer_game(difficulty: Difficulty, human: Player, first: Player) -> Game {
    let config = TicTacToeConfig::new()
        .with_mode(GameMode::HumanVsComputer)
        .with_difficulty(difficulty)
        .with_human(human)
        .with_first(first)
        .with_turn_seconds(None);
    Game::with_seed(config, 7).unwrap()
}

/// A two-human game with the default 30 second countdown
pub fn two_player_game() -> Game {
    let config = TicTacToeConfig::new().with_mode(GameMode::HumanVsHuman);
    Game::with_seed(config, 7).unwrap()
}

/// Alternate marks from the mark to move, stopping at the first error.
pub fn play_cells(game: &mut Game, cells: &[usize]) {
    for &cell in cells {
        let mark = game.to_move();
        game.apply_cell_selection(cell, mark).unwrap();
    }
}
