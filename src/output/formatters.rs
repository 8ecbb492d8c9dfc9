//! Formatting utilities shared by the line-mode and TUI shells

use crate::core::{Board, Side};
use crate::game::Rejection;

/// Player-facing text for a rejection
#[must_use]
pub fn rejection_message(rejection: &Rejection) -> String {
    match rejection {
        Rejection::TooShort { .. } => "Too short".to_string(),
        Rejection::InvalidCharacter(c) => format!("\"{c}\" is not a letter"),
        Rejection::WrongStart { expected, .. } => format!("Word must start with \"{expected}\""),
        Rejection::LetterNotOnBoard(_) => "Not available on the board".to_string(),
        Rejection::SameSideAdjacent { .. } => {
            "Cannot use two letters from the same side consecutively".to_string()
        }
        Rejection::DuplicateWord(word) => format!("Word \"{word}\" has already been used"),
        Rejection::LetterAlreadyUsed(c) => format!("Letter \"{c}\" has already been used"),
        Rejection::NotFound(_) => "Not in word list".to_string(),
        Rejection::OracleUnavailable(_) => {
            "Error checking word validity. Check connection?".to_string()
        }
        Rejection::SubmissionPending => "Still checking the last word".to_string(),
        Rejection::StaleVerdict => "Word changed before it was checked".to_string(),
    }
}

/// Lay the board out as a square grid
///
/// The top side fills the first row, the bottom side the last, and the left
/// and right sides the outer columns in between. Corners and the middle are
/// `None`.
#[must_use]
pub fn board_grid(board: &Board) -> Vec<Vec<Option<char>>> {
    let n = board.per_side();
    let size = n + 2;
    let mut grid = vec![vec![None; size]; size];

    for (i, &c) in board.side(Side::Top).iter().enumerate() {
        grid[0][i + 1] = Some(c);
    }
    for (i, &c) in board.side(Side::Bottom).iter().enumerate() {
        grid[size - 1][i + 1] = Some(c);
    }
    for (i, &c) in board.side(Side::Left).iter().enumerate() {
        grid[i + 1][0] = Some(c);
    }
    for (i, &c) in board.side(Side::Right).iter().enumerate() {
        grid[i + 1][size - 1] = Some(c);
    }

    grid
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
