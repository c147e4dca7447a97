//! Strictly OXO - rules engine for generalized noughts and crosses
//!
//! Boards from 1x1 up to 9x9 that can grow or shrink between moves, any
//! number of players taking turns, and a configurable run length to win.
//!
//! # Architecture
//!
//! - **Model**: [`GameState`] holds the cells, roster, turn pointer, win
//!   threshold and outcome
//! - **Controller**: [`Controller`] parses move commands, validates them,
//!   detects wins and draws, and applies board edits
//! - **Rules**: pure win/draw checks over a `GameState`
//!
//! # Example
//!
//! ```
//! use strictly_oxo::{GameConfig, Player};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = GameConfig::default().build()?;
//! for command in ["a1", "b1", "a2", "b2", "a3"] {
//!     game.handle_command(command)?;
//! }
//! assert_eq!(game.state().winner(), Some(Player::new('X')));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod command;
mod config;
mod controller;
mod error;
mod invariants;
mod model;
mod rules;
mod types;

// Crate-level exports - Core types
pub use types::{
    Axis, Cell, EditOutcome, GameStatus, MAX_EXTENT, MAX_IDENTIFIER_INDEX, MIN_EXTENT,
    MIN_WIN_THRESHOLD, Player,
};

// Crate-level exports - Model and controller
pub use controller::Controller;
pub use model::GameState;

// Crate-level exports - Commands and rules
pub use command::{Coordinate, row_letter};
pub use rules::{Direction, WinningLine, find_run, is_empty, is_full};

// Crate-level exports - Invariants
pub use invariants::{
    BoardInvariants, BoundedExtentInvariant, Invariant, InvariantSet, InvariantViolation,
    RectangularBoardInvariant, ThresholdFloorInvariant,
};

// Crate-level exports - Errors and configuration
pub use config::{ConfigError, GameConfig};
pub use error::{ModelError, MoveError};
