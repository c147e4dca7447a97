//! Core domain types for noughts and crosses.

use serde::{Deserialize, Serialize};

/// Smallest number of rows or columns a board may have.
pub const MIN_EXTENT: usize = 1;

/// Largest number of rows or columns a board may have.
pub const MAX_EXTENT: usize = 9;

/// Floor for the run length needed to win.
pub const MIN_WIN_THRESHOLD: usize = 3;

/// Number of distinct row letters and column digits a command may name.
pub const MAX_IDENTIFIER_INDEX: usize = 26;

/// A player, identified by the symbol drawn in the cells they own.
///
/// Players are compared by symbol, so two `Player` values with the same
/// symbol are the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Player {
    symbol: char,
}

impl Player {
    /// Creates a player drawn with the given symbol.
    pub const fn new(symbol: char) -> Self {
        Self { symbol }
    }

    /// Returns the player's display symbol.
    pub fn symbol(&self) -> char {
        self.symbol
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody owns the cell.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Owned(Player),
}

impl Cell {
    /// Returns the owning player, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }

    /// Checks whether the cell is unowned.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Player>> for Cell {
    fn from(owner: Option<Player>) -> Self {
        owner.map_or(Cell::Empty, Cell::Owned)
    }
}

/// Which half of a cell identifier an error refers to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Axis {
    /// The row letter.
    Row,
    /// The column digit.
    Column,
}

/// Current status of the game.
///
/// A game holds at most one terminal outcome at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Every cell is owned and nobody won.
    Drawn,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress | GameStatus::Drawn => None,
        }
    }

    /// Returns true if the game was drawn.
    pub fn is_drawn(&self) -> bool {
        matches!(self, GameStatus::Drawn)
    }

    /// Returns true for either terminal outcome.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}

/// Result of a board edit.
///
/// Edits that would break a board rule are refused rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditOutcome {
    /// The edit changed the game.
    Applied,
    /// The edit was not allowed in the current state and nothing changed.
    Refused,
}

impl EditOutcome {
    /// Returns true if the edit changed the game.
    pub fn is_applied(self) -> bool {
        matches!(self, EditOutcome::Applied)
    }
}
