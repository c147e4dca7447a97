//! Game rules for noughts and crosses.
//!
//! Pure functions for evaluating a `GameState`. They never mutate the
//! state; recording an outcome is the controller's job.

pub mod draw;
pub mod win;

pub use draw::{is_empty, is_full};
pub use win::{Direction, WinningLine, find_run};
