//! Output formatting and progress bars for the terminal front-end

use indicatif::{ProgressBar, ProgressStyle};

use crate::{dots, scores::Scoreboard, tictactoe};

/// Create a progress bar for a batch of simulated games
pub fn create_match_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{key}:"), value);
}

pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Tic-tac-toe board with empty cells shown as their keypad number (1-9)
pub fn render_tictactoe(board: &tictactoe::BoardState) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let pos = row * 3 + col;
                match board.get(pos) {
                    tictactoe::Cell::Empty => (pos + 1).to_string(),
                    cell => cell.to_char().to_string(),
                }
            })
            .collect();
        out.push_str(&format!(" {} ", cells.join(" | ")));
        if row < 2 {
            out.push_str("\n---+---+---\n");
        }
    }
    out
}

/// Dots-and-boxes board framed with its grid coordinates.
///
/// Dots take one character and edges three, so each coordinate label sits
/// over the dot or the middle of the edge it names.
pub fn render_dots(board: &dots::BoardState) -> String {
    let header: String = (0..board.span()).map(|col| format!("{col:<2}")).collect();
    let mut out = format!("    {}\n", header.trim_end());

    for (row, line) in board.to_string().lines().enumerate() {
        let text = format!("{row:>2}  {line}");
        out.push_str(text.trim_end());
        out.push('\n');
    }
    out
}

/// One-line scoreboard summary
pub fn format_scores(scores: &Scoreboard) -> String {
    format!(
        "X: {}  O: {}  Draws: {}",
        scores.x_wins, scores.o_wins, scores.draws
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tictactoe_numbers_empty_cells() {
        let board = tictactoe::BoardState::from_string("X.. .O. ...", tictactoe::Player::X).unwrap();
        assert_eq!(
            render_tictactoe(&board),
            " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_render_dots_labels_grid() {
        let mut board = dots::BoardState::new(1).unwrap();
        board.claim(dots::Edge::new(0, 1)).unwrap();
        assert_eq!(render_dots(&board), "    0 1 2\n 0  +---+\n 1\n 2  +   +\n");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.125), "12.5%");
    }
}
