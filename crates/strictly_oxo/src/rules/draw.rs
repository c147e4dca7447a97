//! Full/empty board checks used for draw detection.

use super::super::GameState;
use tracing::instrument;

/// Checks if every cell is owned.
///
/// A full board with no winner is a draw.
#[instrument(skip(state))]
pub fn is_full(state: &GameState) -> bool {
    state.cells().all(|(_, _, cell)| !cell.is_empty())
}

/// Checks if no cell is owned.
#[instrument(skip(state))]
pub fn is_empty(state: &GameState) -> bool {
    state.cells().all(|(_, _, cell)| cell.is_empty())
}
