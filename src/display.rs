//! Board rendering.
//!
//! Writes a column-index header and the board's symbol grid to any
//! `Write` sink. Pure output over a read-only snapshot.

use std::io::{self, Write};

use crate::board::Board;

/// Renders the board with a column-index header, top row first.
pub fn render<W: Write>(board: &Board, out: &mut W) -> io::Result<()> {
    let header: Vec<String> = (0..board.cols()).map(|col| col.to_string()).collect();
    writeln!(out, "[ {} ]", header.join("  "))?;

    for row in 0..board.rows() {
        let symbols: Vec<String> = board.row_symbols(row).map(String::from).collect();
        writeln!(out, "[ {} ]", symbols.join("  "))?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn renders_header_and_rows() {
        let mut board = Board::new(4, 5).unwrap();
        board.drop_piece(0, Color::Black).unwrap();
        board.drop_piece(2, Color::Red).unwrap();

        let mut out = Vec::new();
        render(&board, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "[ 0  1  2  3  4 ]");
        assert_eq!(lines[1], "[ -  -  -  -  - ]");
        assert_eq!(lines[4], "[ B  -  R  -  - ]");
        // One header, four rows, one trailing blank line.
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[5], "");
    }

    #[test]
    fn render_does_not_mutate() {
        let mut board = Board::new(4, 4).unwrap();
        board.drop_piece(1, Color::Red).unwrap();
        let before = board.clone();
        render(&board, &mut Vec::new()).unwrap();
        assert_eq!(board, before);
    }
}
