//! Parsing of driver input lines.

use strum::EnumString;

/// Board edits and session commands typed instead of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DriverCommand {
    /// Append an empty row.
    AddRow,
    /// Remove the last row if it is empty.
    RemoveRow,
    /// Append an empty column.
    AddColumn,
    /// Remove the last column if it is empty.
    RemoveColumn,
    /// Raise the win threshold.
    IncreaseThreshold,
    /// Lower the win threshold (empty board or after a win).
    DecreaseThreshold,
    /// Clear the board.
    Reset,
    /// Leave the game.
    Quit,
}

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A driver command.
    Command(DriverCommand),
    /// Anything else is handed to the controller as a move.
    Move(String),
}

impl Input {
    /// Classifies a trimmed input line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        line.parse::<DriverCommand>()
            .map(Input::Command)
            .unwrap_or_else(|_| Input::Move(line.to_string()))
    }
}
