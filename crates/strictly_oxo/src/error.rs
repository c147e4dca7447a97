//! Error types for move handling and board access.

use super::types::Axis;
use derive_more::{Display, Error};

/// Error raised when a move command is rejected.
///
/// A rejected command leaves the board and turn order untouched, so the
/// caller can retry straight away.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The command is not exactly two characters long.
    #[display("Identifier must be 2 characters long, got {}", _0)]
    InvalidIdentifierLength(usize),

    /// A character is not a usable row letter or column digit.
    #[display("Invalid {} character '{}'", _0, _1)]
    InvalidIdentifierCharacter(Axis, char),

    /// The coordinate lies outside the current board.
    #[display("{} {} is outside the board", _0, _1)]
    OutsideCellRange(Axis, usize),

    /// The cell is owned already, or the game has been won.
    #[display("Cell at row {} column {} is already taken", row, col)]
    CellAlreadyTaken {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },

    /// The model refused an access the controller should never make.
    #[display("Model error: {}", _0)]
    Model(ModelError),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Model(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for MoveError {
    fn from(err: ModelError) -> Self {
        MoveError::Model(err)
    }
}

/// Contract violation when reading or writing the game model.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ModelError {
    /// Cell coordinates exceed the board extents.
    #[display("Cell ({}, {}) is out of bounds", row, col)]
    OutOfBounds {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },

    /// Player number is not in the roster.
    #[display("Player index {} out of range for {} players", index, count)]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Roster size.
        count: usize,
    },

    /// A player with this symbol is already in the roster.
    #[display("Player '{}' already exists", symbol)]
    DuplicatePlayer {
        /// The clashing symbol.
        symbol: char,
    },

    /// The roster is empty, so nobody can move.
    #[display("Game has no players")]
    NoPlayers,
}
