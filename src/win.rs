//! Win detection.
//!
//! Checks whether the most recent drop completed a run of four or more
//! same-color pieces horizontally, vertically, or on either diagonal.
//! Stateless: every function takes a read-only view of the board.

use crate::board::{Board, Color, Landing};

/// Length of run required to win.
const WIN_LENGTH: usize = 4;

/// Returns true if `color` has four or more in a row through any line that
/// the piece at `landing` could have completed. Row and column checks scan
/// only the landing piece's line; diagonal checks scan the whole board,
/// which gives identical results at a cost proportional to the board area.
pub fn has_win(board: &Board, landing: Landing, color: Color) -> bool {
    horizontal_win(board, landing.row, color)
        || vertical_win(board, landing.col, color)
        || diagonal_win_down_right(board, color)
        || diagonal_win_down_left(board, color)
}

/// Counts a run along one line of cells, fed one cell at a time.
///
/// The run test happens after counting each cell, so a run that completes
/// at the final cell of a line still registers.
struct RunCounter {
    count: usize,
}

impl RunCounter {
    fn new() -> RunCounter {
        RunCounter { count: 0 }
    }

    /// Feeds the next cell's match result; returns true once the run
    /// reaches the winning length.
    fn feed(&mut self, matches: bool) -> bool {
        if matches {
            self.count += 1;
        } else {
            self.count = 0;
        }
        self.count >= WIN_LENGTH
    }
}

/// Scans the full row containing the last move, left to right.
fn horizontal_win(board: &Board, row: usize, color: Color) -> bool {
    let mut run = RunCounter::new();
    (0..board.cols()).any(|col| run.feed(board.cell(row, col).is(color)))
}

/// Scans the full column containing the last move, top to bottom.
fn vertical_win(board: &Board, col: usize, color: Color) -> bool {
    let mut run = RunCounter::new();
    (0..board.rows()).any(|row| run.feed(board.cell(row, col).is(color)))
}

/// Scans every ↘ diagonal (row and column increasing together).
/// Diagonals start from the top row and from the left column.
fn diagonal_win_down_right(board: &Board, color: Color) -> bool {
    let starts = (0..board.cols())
        .map(|col| (0, col))
        .chain((1..board.rows()).map(|row| (row, 0)));

    for (start_row, start_col) in starts {
        let mut run = RunCounter::new();
        let steps = (board.rows() - start_row).min(board.cols() - start_col);
        for i in 0..steps {
            if run.feed(board.cell(start_row + i, start_col + i).is(color)) {
                return true;
            }
        }
    }
    false
}

/// Scans every ↙ diagonal (row decreasing as column increases).
/// Diagonals start from the bottom row and from the left column.
fn diagonal_win_down_left(board: &Board, color: Color) -> bool {
    let last_row = board.rows() - 1;
    let starts = (0..board.cols())
        .map(|col| (last_row, col))
        .chain((0..last_row).map(|row| (row, 0)));

    for (start_row, start_col) in starts {
        let mut run = RunCounter::new();
        let steps = (start_row + 1).min(board.cols() - start_col);
        for i in 0..steps {
            if run.feed(board.cell(start_row - i, start_col + i).is(color)) {
                return true;
            }
        }
    }
    false
}
