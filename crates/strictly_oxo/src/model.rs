//! Board state model: cells, roster, turn pointer, threshold and outcome.
//!
//! The model only enforces its own structural rules (rectangular board,
//! bounded extents, threshold floor). Move legality lives in the controller.

use super::error::ModelError;
use super::types::{
    Cell, EditOutcome, GameStatus, MAX_EXTENT, MIN_EXTENT, MIN_WIN_THRESHOLD, Player,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Rows of cells; every row has the same length.
    cells: Vec<Vec<Cell>>,
    /// Turn order.
    players: Vec<Player>,
    /// Index into `players` of the player to move.
    current_player: usize,
    /// Run length needed to win.
    win_threshold: usize,
    /// Terminal outcome, if any.
    status: GameStatus,
}

impl GameState {
    /// Creates an empty board with no players.
    ///
    /// Dimensions are clamped into `[MIN_EXTENT, MAX_EXTENT]` and the
    /// threshold is raised to `MIN_WIN_THRESHOLD` if needed.
    #[instrument]
    pub fn new(rows: usize, columns: usize, win_threshold: usize) -> Self {
        let rows = rows.clamp(MIN_EXTENT, MAX_EXTENT);
        let columns = columns.clamp(MIN_EXTENT, MAX_EXTENT);
        Self {
            cells: vec![vec![Cell::Empty; columns]; rows],
            players: Vec::new(),
            current_player: 0,
            win_threshold: win_threshold.max(MIN_WIN_THRESHOLD),
            status: GameStatus::InProgress,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Dimensions and cells
    // ─────────────────────────────────────────────────────────────

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Returns the cell at the given coordinates, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns the owner of a cell.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::OutOfBounds` if the coordinates are off the board.
    pub fn cell_owner(&self, row: usize, col: usize) -> Result<Option<Player>, ModelError> {
        self.cell(row, col)
            .map(Cell::owner)
            .ok_or(ModelError::OutOfBounds { row, col })
    }

    /// Assigns (or clears) ownership of a cell without any legality check.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::OutOfBounds` if the coordinates are off the board.
    #[instrument(skip(self))]
    pub fn set_cell_owner(
        &mut self,
        row: usize,
        col: usize,
        owner: Option<Player>,
    ) -> Result<(), ModelError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(ModelError::OutOfBounds { row, col })?;
        *cell = Cell::from(owner);
        Ok(())
    }

    /// Iterates every cell with its coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, *cell))
        })
    }

    /// Sets every cell to unowned.
    #[instrument(skip(self))]
    pub fn clear_cells(&mut self) {
        self.cells.iter_mut().flatten().for_each(|c| *c = Cell::Empty);
    }

    // ─────────────────────────────────────────────────────────────
    //  Resizing
    // ─────────────────────────────────────────────────────────────

    /// Appends an empty row unless the board is already at full height.
    #[instrument(skip(self), fields(rows = self.row_count()))]
    pub fn add_row(&mut self) -> EditOutcome {
        if self.row_count() >= MAX_EXTENT {
            debug!("Board already at maximum height");
            return EditOutcome::Refused;
        }
        self.cells.push(vec![Cell::Empty; self.column_count()]);
        self.clear_draw();
        EditOutcome::Applied
    }

    /// Appends an empty column unless the board is already at full width.
    #[instrument(skip(self), fields(columns = self.column_count()))]
    pub fn add_column(&mut self) -> EditOutcome {
        if self.column_count() >= MAX_EXTENT {
            debug!("Board already at maximum width");
            return EditOutcome::Refused;
        }
        self.cells.iter_mut().for_each(|row| row.push(Cell::Empty));
        self.clear_draw();
        EditOutcome::Applied
    }

    /// Removes the last row if it is entirely empty and not the only row.
    #[instrument(skip(self), fields(rows = self.row_count()))]
    pub fn remove_row(&mut self) -> EditOutcome {
        let last_row_empty = self
            .cells
            .last()
            .is_some_and(|row| row.iter().all(|c| c.is_empty()));
        if !last_row_empty || self.row_count() <= MIN_EXTENT {
            debug!(last_row_empty, "Row removal refused");
            return EditOutcome::Refused;
        }
        self.cells.pop();
        self.after_shrink();
        EditOutcome::Applied
    }

    /// Removes the last column if it is entirely empty and not the only column.
    #[instrument(skip(self), fields(columns = self.column_count()))]
    pub fn remove_column(&mut self) -> EditOutcome {
        let last_column_empty = self
            .cells
            .iter()
            .all(|row| row.last().is_some_and(|c| c.is_empty()));
        if !last_column_empty || self.column_count() <= MIN_EXTENT {
            debug!(last_column_empty, "Column removal refused");
            return EditOutcome::Refused;
        }
        self.cells.iter_mut().for_each(|row| {
            row.pop();
        });
        self.after_shrink();
        EditOutcome::Applied
    }

    /// Growing the board makes a draw no longer certain.
    fn clear_draw(&mut self) {
        if self.status.is_drawn() {
            self.status = GameStatus::InProgress;
        }
    }

    /// Shrinking invalidates any outcome and steps the turn pointer back.
    fn after_shrink(&mut self) {
        self.status = GameStatus::InProgress;
        if self.current_player > 0 && !self.players.is_empty() {
            self.current_player = (self.current_player - 1) % self.players.len();
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Win threshold
    // ─────────────────────────────────────────────────────────────

    /// Returns the run length needed to win.
    pub fn win_threshold(&self) -> usize {
        self.win_threshold
    }

    /// Sets the run length needed to win, clamped to `MIN_WIN_THRESHOLD`.
    #[instrument(skip(self))]
    pub fn set_win_threshold(&mut self, threshold: usize) {
        self.win_threshold = threshold.max(MIN_WIN_THRESHOLD);
    }

    // ─────────────────────────────────────────────────────────────
    //  Outcome
    // ─────────────────────────────────────────────────────────────

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns true if the game is drawn.
    pub fn is_drawn(&self) -> bool {
        self.status.is_drawn()
    }

    /// Records a winner, or clears a recorded win with `None`.
    pub fn set_winner(&mut self, winner: Option<Player>) {
        match winner {
            Some(player) => self.status = GameStatus::Won(player),
            None if self.winner().is_some() => self.status = GameStatus::InProgress,
            None => {}
        }
    }

    /// Marks the game drawn, or clears a recorded draw with `false`.
    pub fn set_drawn(&mut self, drawn: bool) {
        if drawn {
            self.status = GameStatus::Drawn;
        } else {
            self.clear_draw();
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Players
    // ─────────────────────────────────────────────────────────────

    /// Appends a player to the turn order.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicatePlayer` if the symbol is already taken.
    #[instrument(skip(self))]
    pub fn add_player(&mut self, player: Player) -> Result<(), ModelError> {
        if self.players.contains(&player) {
            return Err(ModelError::DuplicatePlayer {
                symbol: player.symbol(),
            });
        }
        self.players.push(player);
        Ok(())
    }

    /// Returns the number of players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index` in turn order.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::IndexOutOfRange` if there is no such player.
    pub fn player_by_number(&self, index: usize) -> Result<Player, ModelError> {
        self.players
            .get(index)
            .copied()
            .ok_or(ModelError::IndexOutOfRange {
                index,
                count: self.players.len(),
            })
    }

    /// Returns the index of the player to move.
    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    /// Sets the player to move, wrapping around the roster.
    pub fn set_current_player_index(&mut self, index: usize) {
        self.current_player = match self.players.len() {
            0 => 0,
            count => index % count,
        };
    }

    /// Returns the player to move.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::NoPlayers` if the roster is empty.
    pub fn current_player(&self) -> Result<Player, ModelError> {
        if self.players.is_empty() {
            return Err(ModelError::NoPlayers);
        }
        self.player_by_number(self.current_player)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(3, 3, MIN_WIN_THRESHOLD)
    }
}
