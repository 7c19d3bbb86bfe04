//! The gravity-fed game grid.
//!
//! Pieces dropped into a column slide to the lowest empty row. The board
//! tracks per-column fullness incrementally so the engine can reject moves
//! into saturated columns without rescanning.

use super::cell::{Cell, Color};

/// Minimum board dimension in either direction.
pub const MIN_DIMENSION: usize = 4;

/// Errors produced by board construction and piece drops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least {MIN_DIMENSION}x{MIN_DIMENSION}, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },

    #[error("column {col} is out of range (board has {cols} columns)")]
    ColumnOutOfRange { col: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Where a dropped piece came to rest. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub row: usize,
    pub col: usize,
}

/// A rectangular Connect-Four board.
///
/// Cells are stored row-major with row 0 at the top; a drop fills the
/// highest-index empty row of its column. All mutation goes through
/// [`Board::drop_piece`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    col_full: Vec<bool>,
}

impl Board {
    /// Creates an empty board. Both dimensions must be at least
    /// [`MIN_DIMENSION`]; undersized boards are rejected here, never at
    /// win-check time.
    pub fn new(rows: usize, cols: usize) -> Result<Board, BoardError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(BoardError::TooSmall { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            col_full: vec![false; cols],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, which is also the maximum number of turns.
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the cell at the given coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the board.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    /// Returns true if the given column cannot accept another piece.
    /// Out-of-range columns report as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.col_full.get(col).copied().unwrap_or(true)
    }

    /// Returns true if the given column accepts a drop: in range and not full.
    pub fn is_legal_column(&self, col: usize) -> bool {
        col < self.cols && !self.col_full[col]
    }

    /// Drops a piece of `color` into `col`, scanning from the bottom row
    /// upward for the lowest empty cell. Marks the column full when the
    /// piece lands in the top row. The board is untouched on error.
    pub fn drop_piece(&mut self, col: usize, color: Color) -> Result<Landing, BoardError> {
        if col >= self.cols {
            return Err(BoardError::ColumnOutOfRange {
                col,
                cols: self.cols,
            });
        }
        if self.col_full[col] {
            return Err(BoardError::ColumnFull(col));
        }

        for row in (0..self.rows).rev() {
            if self.cells[row * self.cols + col] == Cell::Empty {
                self.cells[row * self.cols + col] = Cell::Taken(color);
                if row == 0 {
                    self.col_full[col] = true;
                }
                return Ok(Landing { row, col });
            }
        }

        // The full flag is set exactly when the top cell is taken, so an
        // unflagged column always has an empty cell.
        unreachable!("column {} not flagged full but has no empty cell", col)
    }

    /// Returns the symbols of one row, left to right. Row 0 is the top.
    pub fn row_symbols(&self, row: usize) -> impl Iterator<Item = char> + '_ {
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .map(|c| c.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(6, 7).unwrap();
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 7);
        assert_eq!(board.capacity(), 42);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.cell(row, col), Cell::Empty);
            }
        }
        for col in 0..7 {
            assert!(!board.is_column_full(col));
        }
    }

    #[test]
    fn minimum_dimensions_enforced() {
        assert!(Board::new(4, 4).is_ok());
        assert_eq!(
            Board::new(3, 7),
            Err(BoardError::TooSmall { rows: 3, cols: 7 })
        );
        assert_eq!(
            Board::new(6, 2),
            Err(BoardError::TooSmall { rows: 6, cols: 2 })
        );
        assert_eq!(
            Board::new(0, 0),
            Err(BoardError::TooSmall { rows: 0, cols: 0 })
        );
    }

    #[test]
    fn drops_fill_bottom_up() {
        let mut board = Board::new(4, 4).unwrap();
        assert_eq!(
            board.drop_piece(2, Color::Black),
            Ok(Landing { row: 3, col: 2 })
        );
        assert_eq!(
            board.drop_piece(2, Color::Red),
            Ok(Landing { row: 2, col: 2 })
        );
        assert_eq!(
            board.drop_piece(2, Color::Black),
            Ok(Landing { row: 1, col: 2 })
        );
        assert_eq!(board.cell(3, 2), Cell::Taken(Color::Black));
        assert_eq!(board.cell(2, 2), Cell::Taken(Color::Red));
        assert_eq!(board.cell(1, 2), Cell::Taken(Color::Black));
        assert_eq!(board.cell(0, 2), Cell::Empty);
    }

    #[test]
    fn columns_fill_independently() {
        let mut board = Board::new(4, 5).unwrap();
        assert_eq!(
            board.drop_piece(0, Color::Black),
            Ok(Landing { row: 3, col: 0 })
        );
        assert_eq!(
            board.drop_piece(4, Color::Red),
            Ok(Landing { row: 3, col: 4 })
        );
        assert_eq!(
            board.drop_piece(0, Color::Red),
            Ok(Landing { row: 2, col: 0 })
        );
        assert_eq!(board.cell(3, 4), Cell::Taken(Color::Red));
        assert_eq!(board.cell(2, 4), Cell::Empty);
    }

    #[test]
    fn full_flag_set_exactly_at_top_row() {
        let mut board = Board::new(4, 4).unwrap();
        for i in 0..3 {
            board.drop_piece(1, Color::Black).unwrap();
            assert!(!board.is_column_full(1), "not full after {} drops", i + 1);
        }
        let landing = board.drop_piece(1, Color::Black).unwrap();
        assert_eq!(landing.row, 0);
        assert!(board.is_column_full(1));
        // Monotonic: still full on the next query.
        assert!(board.is_column_full(1));
    }

    #[test]
    fn drop_into_full_column_fails_without_mutation() {
        let mut board = Board::new(4, 4).unwrap();
        for _ in 0..4 {
            board.drop_piece(0, Color::Red).unwrap();
        }
        let before = board.clone();
        assert_eq!(
            board.drop_piece(0, Color::Black),
            Err(BoardError::ColumnFull(0))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn drop_out_of_range_fails_without_mutation() {
        let mut board = Board::new(4, 4).unwrap();
        let before = board.clone();
        assert_eq!(
            board.drop_piece(4, Color::Black),
            Err(BoardError::ColumnOutOfRange { col: 4, cols: 4 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_range_column_reports_full() {
        let board = Board::new(4, 4).unwrap();
        assert!(board.is_column_full(17));
        assert!(!board.is_legal_column(17));
    }

    #[test]
    fn row_symbols_snapshot() {
        let mut board = Board::new(4, 4).unwrap();
        board.drop_piece(0, Color::Black).unwrap();
        board.drop_piece(1, Color::Red).unwrap();
        let bottom: String = board.row_symbols(3).collect();
        assert_eq!(bottom, "BR--");
        let top: String = board.row_symbols(0).collect();
        assert_eq!(top, "----");
    }
}
