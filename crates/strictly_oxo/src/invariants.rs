//! Structural invariants of the game state.
//!
//! Invariants are logical properties that must hold after every operation.
//! The controller checks them in debug builds.

use super::types::{MAX_EXTENT, MIN_EXTENT, MIN_WIN_THRESHOLD};
use super::GameState;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for triples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        warn!(invariant = I::description(), "Invariant violated");
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// Every row has the same number of cells.
pub struct RectangularBoardInvariant;

impl Invariant<GameState> for RectangularBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let columns = state.column_count();
        state.rows().iter().all(|row| row.len() == columns)
    }

    fn description() -> &'static str {
        "Every row has the same number of columns"
    }
}

/// Row and column counts stay within the supported extents.
pub struct BoundedExtentInvariant;

impl Invariant<GameState> for BoundedExtentInvariant {
    fn holds(state: &GameState) -> bool {
        let extent = MIN_EXTENT..=MAX_EXTENT;
        extent.contains(&state.row_count()) && extent.contains(&state.column_count())
    }

    fn description() -> &'static str {
        "Board extents stay between 1 and 9"
    }
}

/// The win threshold never drops below its floor.
pub struct ThresholdFloorInvariant;

impl Invariant<GameState> for ThresholdFloorInvariant {
    fn holds(state: &GameState) -> bool {
        state.win_threshold() >= MIN_WIN_THRESHOLD
    }

    fn description() -> &'static str {
        "Win threshold is at least 3"
    }
}

/// All game state invariants as a composable set.
pub type BoardInvariants = (
    RectangularBoardInvariant,
    BoundedExtentInvariant,
    ThresholdFloorInvariant,
);

/// Asserts that all invariants hold (panics on violation in debug builds).
pub fn assert_invariants(state: &GameState) {
    debug_assert!(
        BoardInvariants::check_all(state).is_ok(),
        "Game state invariant violated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariants_hold_for_new_state() {
        assert!(BoardInvariants::check_all(&GameState::default()).is_ok());
        assert!(BoardInvariants::check_all(&GameState::new(9, 1, 7)).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_edits() {
        let mut state = GameState::default();
        for _ in 0..10 {
            state.add_row();
            state.add_column();
        }
        for _ in 0..10 {
            state.remove_row();
        }
        state.set_win_threshold(0);
        assert!(BoardInvariants::check_all(&state).is_ok());
    }

    struct NeverHolds;

    impl Invariant<GameState> for NeverHolds {
        fn holds(_state: &GameState) -> bool {
            false
        }

        fn description() -> &'static str {
            "never holds"
        }
    }

    #[test]
    fn test_set_collects_violations() {
        type Broken = (NeverHolds, RectangularBoardInvariant, NeverHolds);
        let violations = Broken::check_all(&GameState::default()).unwrap_err();
        assert_eq!(
            violations,
            vec![
                InvariantViolation::new("never holds"),
                InvariantViolation::new("never holds")
            ]
        );
    }
}
