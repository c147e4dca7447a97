//! Win detection for boards of any size and any run length.
//!
//! All four line directions share one scan: enumerate every anchor cell from
//! which a run of `win_threshold` cells fits on the board, then walk the run.

use super::super::command::Coordinate;
use super::super::{Cell, GameState, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Direction a winning run travels from its anchor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom down a column.
    Vertical,
    /// Down and to the right.
    DiagonalDownRight,
    /// Down and to the left.
    DiagonalDownLeft,
}

impl Direction {
    /// Row and column change per step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    /// Moves `steps` cells from `start`, or `None` past the top or left edge.
    pub fn step(self, start: Coordinate, steps: usize) -> Option<Coordinate> {
        let (d_row, d_col) = self.delta();
        let steps = isize::try_from(steps).ok()?;
        Some(Coordinate::new(
            start.row.checked_add_signed(d_row * steps)?,
            start.col.checked_add_signed(d_col * steps)?,
        ))
    }

    /// Anchors from which a run of `length` cells stays on a `rows` x `cols` board.
    pub fn anchors(
        self,
        rows: usize,
        cols: usize,
        length: usize,
    ) -> impl Iterator<Item = Coordinate> {
        let reach = length.saturating_sub(1);
        let (d_row, d_col) = self.delta();
        let row_range = match d_row {
            0 => 0..rows,
            _ => 0..rows.saturating_sub(reach),
        };
        let col_range = match d_col {
            0 => 0..cols,
            1 => 0..cols.saturating_sub(reach),
            _ => reach..cols,
        };
        row_range.flat_map(move |row| col_range.clone().map(move |col| Coordinate::new(row, col)))
    }
}

/// A run of cells that satisfies the win threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// First cell of the run.
    pub start: Coordinate,
    /// Direction the run travels.
    pub direction: Direction,
    /// Number of cells in the run.
    pub length: usize,
}

impl WinningLine {
    /// Returns every cell in the run.
    pub fn cells(&self) -> Vec<Coordinate> {
        (0..self.length)
            .filter_map(|n| self.direction.step(self.start, n))
            .collect()
    }
}

/// Finds a run of `win_threshold` cells owned by `player`.
///
/// Directions are tried horizontal, vertical, then both diagonals; the first
/// match is returned.
#[instrument(skip(state), fields(threshold = state.win_threshold()))]
pub fn find_run(state: &GameState, player: Player) -> Option<WinningLine> {
    let length = state.win_threshold();
    Direction::iter().find_map(|direction| {
        direction
            .anchors(state.row_count(), state.column_count(), length)
            .find(|&start| run_owned_by(state, player, start, direction, length))
            .map(|start| WinningLine {
                start,
                direction,
                length,
            })
    })
}

/// Checks that all `length` cells from `start` belong to `player`.
fn run_owned_by(
    state: &GameState,
    player: Player,
    start: Coordinate,
    direction: Direction,
    length: usize,
) -> bool {
    (0..length).all(|n| {
        direction
            .step(start, n)
            .and_then(|c| state.cell(c.row, c.col))
            == Some(Cell::Owned(player))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Player = Player::new('X');
    const O: Player = Player::new('O');

    fn board(rows: usize, cols: usize, threshold: usize, owned: &[(usize, usize, Player)]) -> GameState {
        let mut state = GameState::new(rows, cols, threshold);
        for &(row, col, player) in owned {
            state.set_cell_owner(row, col, Some(player)).expect("in bounds");
        }
        state
    }

    #[test]
    fn test_no_winner_empty_board() {
        let state = GameState::default();
        assert_eq!(find_run(&state, X), None);
    }

    #[test]
    fn test_winner_row() {
        let state = board(3, 3, 3, &[(1, 0, X), (1, 1, X), (1, 2, X)]);
        let line = find_run(&state, X).expect("row of three");
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.start, Coordinate::new(1, 0));
        assert_eq!(find_run(&state, O), None);
    }

    #[test]
    fn test_winner_column() {
        let state = board(3, 3, 3, &[(0, 0, X), (1, 0, X), (2, 0, X)]);
        assert_eq!(find_run(&state, X).map(|l| l.direction), Some(Direction::Vertical));
    }

    #[test]
    fn test_winner_diagonal_down_right() {
        let state = board(3, 3, 3, &[(0, 0, O), (1, 1, O), (2, 2, O)]);
        assert_eq!(
            find_run(&state, O).map(|l| l.direction),
            Some(Direction::DiagonalDownRight)
        );
    }

    #[test]
    fn test_winner_diagonal_down_left() {
        let state = board(3, 3, 3, &[(0, 2, O), (1, 1, O), (2, 0, O)]);
        let line = find_run(&state, O).expect("anti-diagonal");
        assert_eq!(line.direction, Direction::DiagonalDownLeft);
        assert_eq!(
            line.cells(),
            vec![
                Coordinate::new(0, 2),
                Coordinate::new(1, 1),
                Coordinate::new(2, 0)
            ]
        );
    }

    #[test]
    fn test_broken_run_does_not_count() {
        let state = board(1, 5, 3, &[(0, 0, X), (0, 1, X), (0, 2, O), (0, 3, X), (0, 4, X)]);
        assert_eq!(find_run(&state, X), None);
    }

    #[test]
    fn test_run_away_from_origin() {
        let state = board(5, 5, 4, &[(1, 4, X), (2, 3, X), (3, 2, X), (4, 1, X)]);
        assert_eq!(
            find_run(&state, X).map(|l| l.start),
            Some(Coordinate::new(1, 4))
        );
    }

    #[test]
    fn test_threshold_longer_than_board() {
        let state = board(3, 3, 4, &[(0, 0, X), (0, 1, X), (0, 2, X)]);
        assert_eq!(find_run(&state, X), None);
    }

    #[test]
    fn test_anchors_fit_run() {
        let anchors: Vec<_> = Direction::DiagonalDownLeft.anchors(3, 4, 3).collect();
        assert_eq!(anchors, vec![Coordinate::new(0, 2), Coordinate::new(0, 3)]);
        assert_eq!(Direction::Vertical.anchors(2, 3, 3).count(), 0);
        assert_eq!(Direction::Horizontal.anchors(2, 5, 3).count(), 6);
    }

    #[test]
    fn test_step_stops_at_left_edge() {
        assert_eq!(Direction::DiagonalDownLeft.step(Coordinate::new(0, 1), 2), None);
    }
}
