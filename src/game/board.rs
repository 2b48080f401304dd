use crate::error::MoveError;

use super::player::Player;

/// Default board dimensions, matching the classic 6x7 game.
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// The board state machine: a dimensioned grid of cells mutated only by
/// [`Board::drop_piece`] and [`Board::resolve_cascade`].
///
/// Within every column the occupied cells are bottom-contiguous (no piece
/// floats above an empty cell); both mutating operations preserve this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Dimensions are fixed for the board's
    /// lifetime; tests can use boards smaller than the default 6x7.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `rows - 1` is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Columns that can still accept a piece.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a piece in a column, returning the coordinates where it landed.
    ///
    /// This is the only primitive mutation; it never runs the cascade or a
    /// win check itself, so callers can sequence those explicitly.
    /// On error the board is unchanged.
    pub fn drop_piece(
        &mut self,
        col: usize,
        player: Player,
    ) -> Result<(usize, usize), MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                col,
                cols: self.cols,
            });
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            if self.get(row, col) == Cell::Empty {
                self.set(row, col, player.to_cell());
                return Ok((row, col));
            }
        }

        Err(MoveError::ColumnFull(col))
    }

    /// Resolve the vanish cascade: clear every horizontal and vertical
    /// four-in-a-row, let the pieces above fall, and repeat until a full
    /// scan finds nothing. Diagonal runs are never cleared; they are the
    /// win condition, checked separately by [`Board::check_diagonal_win`].
    ///
    /// Returns true if anything was cleared. Each clearing pass strictly
    /// reduces the number of occupied cells, so the loop runs at most
    /// `rows * cols` times.
    pub fn resolve_cascade(&mut self) -> bool {
        let mut cleared_any = false;

        loop {
            let marked = self.mark_lines();
            if !marked.iter().any(|&m| m) {
                break;
            }

            for (idx, &m) in marked.iter().enumerate() {
                if m {
                    self.cells[idx] = Cell::Empty;
                }
            }
            self.apply_gravity();
            cleared_any = true;
        }

        cleared_any
    }

    /// Mark every cell covered by a horizontal or vertical window of four
    /// equal occupied cells. Detection runs against the board as it stands
    /// and clearing happens afterwards in one batch, so every window of a
    /// longer run matches: a run of five clears all five cells.
    fn mark_lines(&self) -> Vec<bool> {
        let mut marked = vec![false; self.cells.len()];

        // Horizontal windows
        for row in 0..self.rows {
            for col in 0..self.cols.saturating_sub(3) {
                let first = self.get(row, col);
                if first != Cell::Empty && (1..4).all(|k| self.get(row, col + k) == first) {
                    for k in 0..4 {
                        marked[row * self.cols + col + k] = true;
                    }
                }
            }
        }

        // Vertical windows
        for col in 0..self.cols {
            for row in 0..self.rows.saturating_sub(3) {
                let first = self.get(row, col);
                if first != Cell::Empty && (1..4).all(|k| self.get(row + k, col) == first) {
                    for k in 0..4 {
                        marked[(row + k) * self.cols + col] = true;
                    }
                }
            }
        }

        marked
    }

    /// Repack every column against the bottom, preserving the top-to-bottom
    /// order of its remaining pieces.
    fn apply_gravity(&mut self) {
        for col in 0..self.cols {
            let pieces: Vec<Cell> = (0..self.rows)
                .map(|row| self.get(row, col))
                .filter(|&cell| cell != Cell::Empty)
                .collect();

            for row in 0..self.rows {
                self.set(row, col, Cell::Empty);
            }

            let base = self.rows - pieces.len();
            for (i, piece) in pieces.into_iter().enumerate() {
                self.set(base + i, col, piece);
            }
        }
    }

    /// Check whether `player` has four consecutive pieces along either
    /// diagonal. Horizontal and vertical runs never win; the cascade clears
    /// them, so call this only after [`Board::resolve_cascade`] for the side
    /// that just moved.
    pub fn check_diagonal_win(&self, player: Player) -> bool {
        if self.rows < 4 || self.cols < 4 {
            return false;
        }
        let target = player.to_cell();

        // Descending diagonals (down-right, \)
        for row in 0..=self.rows - 4 {
            for col in 0..=self.cols - 4 {
                if (0..4).all(|k| self.get(row + k, col + k) == target) {
                    return true;
                }
            }
        }

        // Ascending diagonals (up-right, /)
        for row in 3..self.rows {
            for col in 0..=self.cols - 4 {
                if (0..4).all(|k| self.get(row - k, col + k) == target) {
                    return true;
                }
            }
        }

        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
