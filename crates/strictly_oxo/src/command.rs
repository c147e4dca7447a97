//! Parsing of two-character move commands such as `a1` or `C3`.

use super::error::MoveError;
use super::types::{Axis, MAX_IDENTIFIER_INDEX};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A zero-based cell coordinate named by a move command.
///
/// Parsing only checks the command's shape. Whether the cell lies on the
/// current board is the controller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parses `<row letter><column digit>`.
    ///
    /// Row letters are case-insensitive (`a` is row 0). Column digits are
    /// 1-based (`1` is column 0).
    ///
    /// # Errors
    ///
    /// - `InvalidIdentifierLength` unless the command is exactly 2 characters.
    /// - `InvalidIdentifierCharacter` if the row is not an ASCII letter or the
    ///   column is not a digit from 1 to 9.
    #[instrument]
    pub fn parse(command: &str) -> Result<Self, MoveError> {
        let chars: Vec<char> = command.chars().collect();
        let &[row_char, col_char] = chars.as_slice() else {
            return Err(MoveError::InvalidIdentifierLength(chars.len()));
        };

        let row = row_index(row_char)
            .ok_or(MoveError::InvalidIdentifierCharacter(Axis::Row, row_char))?;
        let col = column_index(col_char)
            .ok_or(MoveError::InvalidIdentifierCharacter(Axis::Column, col_char))?;

        Ok(Self { row, col })
    }

    /// Formats the coordinate back into command form (`a1`).
    pub fn label(&self) -> String {
        format!("{}{}", row_letter(self.row), self.col + 1)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Coordinate {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Maps `a`/`A` to 0, `b`/`B` to 1, and so on.
fn row_index(c: char) -> Option<usize> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    let index = usize::from(c.to_ascii_lowercase() as u8 - b'a');
    (index < MAX_IDENTIFIER_INDEX).then_some(index)
}

/// Maps `1` to 0, `2` to 1, and so on. `0` names no column.
fn column_index(c: char) -> Option<usize> {
    if !c.is_ascii_digit() {
        return None;
    }
    let index = usize::try_from(c.to_digit(10)?).ok()?.checked_sub(1)?;
    (index < MAX_IDENTIFIER_INDEX).then_some(index)
}

/// Row letter shown to players for a zero-based row.
pub fn row_letter(row: usize) -> char {
    u8::try_from(row)
        .ok()
        .and_then(|r| b'a'.checked_add(r))
        .map_or('?', char::from)
}
