//! Plain-text board rendering.

use strictly_oxo::{Cell, GameState, GameStatus, row_letter};

/// Formats the board with row letters and 1-based column numbers.
///
/// ```text
///    1 2 3
/// a  X . .
/// b  . O .
/// c  . . .
/// ```
pub fn render_board(state: &GameState) -> String {
    let mut result = String::from("  ");
    for col in 0..state.column_count() {
        result.push_str(&format!(" {}", col + 1));
    }
    for (row, cells) in state.rows().iter().enumerate() {
        result.push('\n');
        result.push(row_letter(row));
        result.push(' ');
        for cell in cells {
            let symbol = match cell {
                Cell::Empty => '.',
                Cell::Owned(player) => player.symbol(),
            };
            result.push(' ');
            result.push(symbol);
        }
    }
    result
}

/// One-line summary of whose turn it is or how the game ended.
pub fn render_status(state: &GameState) -> String {
    match state.status() {
        GameStatus::InProgress => match state.current_player() {
            Ok(player) => format!(
                "{} to move (win with {} in a row)",
                player,
                state.win_threshold()
            ),
            Err(err) => err.to_string(),
        },
        status => status.to_string(),
    }
}
