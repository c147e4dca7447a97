//! Move controller: validates commands, applies moves, detects outcomes.

use super::command::Coordinate;
use super::error::{ModelError, MoveError};
use super::invariants::assert_invariants;
use super::rules;
use super::types::{Axis, EditOutcome};
use super::GameState;
use tracing::{debug, info, instrument};

/// Noughts-and-crosses game engine.
///
/// Owns the game state and is the only place moves are validated. Callers
/// submit commands one at a time.
#[derive(Debug, Clone)]
pub struct Controller {
    state: GameState,
}

impl Controller {
    /// Wraps a game state that already has its players.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::NoPlayers` if the roster is empty.
    #[instrument(skip(state), fields(players = state.player_count()))]
    pub fn new(state: GameState) -> Result<Self, ModelError> {
        if state.player_count() == 0 {
            return Err(ModelError::NoPlayers);
        }
        Ok(Self { state })
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns mutable reference to game state.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consumes the controller, returning its state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    // ─────────────────────────────────────────────────────────────
    //  Moves
    // ─────────────────────────────────────────────────────────────

    /// Handles a move command such as `a1`.
    ///
    /// On success the current player owns the named cell. If that ends the
    /// game the turn stays with them; otherwise it passes to the next player.
    ///
    /// # Errors
    ///
    /// - `InvalidIdentifierLength` / `InvalidIdentifierCharacter` for a
    ///   malformed command.
    /// - `OutsideCellRange` if the cell is off the current board.
    /// - `CellAlreadyTaken` if the cell is owned or the game is over.
    ///
    /// The state is unchanged whenever an error is returned.
    #[instrument(skip(self), fields(player = self.state.current_player_index()))]
    pub fn handle_command(&mut self, command: &str) -> Result<(), MoveError> {
        let result = self.try_move(command);
        if let Err(err) = &result {
            debug!(%err, "Command rejected");
        }
        result
    }

    fn try_move(&mut self, command: &str) -> Result<(), MoveError> {
        let Coordinate { row, col } = Coordinate::parse(command)?;

        if row >= self.state.row_count() {
            return Err(MoveError::OutsideCellRange(Axis::Row, row));
        }
        if col >= self.state.column_count() {
            return Err(MoveError::OutsideCellRange(Axis::Column, col));
        }

        // A finished game reports every cell as taken.
        if self.check_for_win() {
            return Err(MoveError::CellAlreadyTaken { row, col });
        }

        let player = self.state.current_player()?;
        if self.state.cell_owner(row, col)?.is_some() {
            return Err(MoveError::CellAlreadyTaken { row, col });
        }

        self.state.set_cell_owner(row, col, Some(player))?;
        debug!(%player, row, col, "Cell claimed");

        if !self.check_for_win() {
            self.state
                .set_current_player_index(self.state.current_player_index() + 1);
        }

        assert_invariants(&self.state);
        Ok(())
    }

    /// Re-evaluates whether the game has ended, recording any outcome.
    ///
    /// Runs are only searched for the player whose turn it currently is,
    /// against the current threshold. A full board with no such run is
    /// recorded as a draw.
    #[instrument(skip(self))]
    pub fn check_for_win(&mut self) -> bool {
        if let Ok(player) = self.state.current_player()
            && let Some(line) = rules::find_run(&self.state, player)
        {
            if self.state.winner() != Some(player) {
                info!(%player, start = %line.start, direction = %line.direction, "Player wins");
            }
            self.state.set_winner(Some(player));
            return true;
        }

        if rules::is_full(&self.state) {
            if !self.state.is_drawn() {
                info!("Game drawn");
            }
            self.state.set_drawn(true);
            return true;
        }

        false
    }

    // ─────────────────────────────────────────────────────────────
    //  Board edits
    // ─────────────────────────────────────────────────────────────

    /// Appends an empty row.
    #[instrument(skip(self))]
    pub fn add_row(&mut self) -> EditOutcome {
        self.edit(GameState::add_row)
    }

    /// Removes the last row if it is empty.
    #[instrument(skip(self))]
    pub fn remove_row(&mut self) -> EditOutcome {
        self.edit(GameState::remove_row)
    }

    /// Appends an empty column.
    #[instrument(skip(self))]
    pub fn add_column(&mut self) -> EditOutcome {
        self.edit(GameState::add_column)
    }

    /// Removes the last column if it is empty.
    #[instrument(skip(self))]
    pub fn remove_column(&mut self) -> EditOutcome {
        self.edit(GameState::remove_column)
    }

    /// Raises the win threshold by one.
    #[instrument(skip(self))]
    pub fn increase_win_threshold(&mut self) -> EditOutcome {
        self.edit(|state| {
            state.set_win_threshold(state.win_threshold().saturating_add(1));
            EditOutcome::Applied
        })
    }

    /// Lowers the win threshold by one.
    ///
    /// Only allowed on an empty board or once someone has won, so a partly
    /// played board never gains a win retroactively. The threshold never
    /// drops below 3.
    #[instrument(skip(self))]
    pub fn decrease_win_threshold(&mut self) -> EditOutcome {
        if !self.is_board_empty() && self.state.winner().is_none() {
            return self.edit(|_| EditOutcome::Refused);
        }
        self.edit(|state| {
            let before = state.win_threshold();
            state.set_win_threshold(before.saturating_sub(1));
            if state.win_threshold() == before {
                EditOutcome::Refused
            } else {
                EditOutcome::Applied
            }
        })
    }

    /// Clears the board and outcome and gives the turn to the first player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.clear_cells();
        self.state.set_current_player_index(0);
        self.state.set_winner(None);
        self.state.set_drawn(false);
        debug!("Game reset");
        assert_invariants(&self.state);
    }

    /// Checks if no cell is owned.
    pub fn is_board_empty(&self) -> bool {
        rules::is_empty(&self.state)
    }

    fn edit(&mut self, apply: impl FnOnce(&mut GameState) -> EditOutcome) -> EditOutcome {
        let outcome = apply(&mut self.state);
        debug!(
            ?outcome,
            rows = self.state.row_count(),
            columns = self.state.column_count(),
            threshold = self.state.win_threshold(),
            "Board edit"
        );
        assert_invariants(&self.state);
        outcome
    }
}
