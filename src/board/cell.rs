//! Player colors and cell states.
//!
//! The two-player set is closed: every occupied cell belongs to either
//! Red or Black, and cells never clear once taken.

/// One of the two players, identified by piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns the single-character board symbol for this color.
    pub const fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }

    /// Returns the display name used in prompts and announcements.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Black => "BLACK",
        }
    }

    /// Returns the opposing color.
    pub const fn other(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// The state of a single board cell.
///
/// A `Taken` cell stays taken for the rest of the game; only empty cells
/// accept a dropped piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Color),
}

impl Cell {
    /// Returns the single-character board symbol: '-' for empty cells,
    /// the owning color's symbol otherwise.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Taken(color) => color.symbol(),
        }
    }

    /// Returns true if this cell holds a piece of the given color.
    pub fn is(self, color: Color) -> bool {
        self == Cell::Taken(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_symbols() {
        assert_eq!(Color::Red.symbol(), 'R');
        assert_eq!(Color::Black.symbol(), 'B');
    }

    #[test]
    fn color_other_swaps() {
        assert_eq!(Color::Red.other(), Color::Black);
        assert_eq!(Color::Black.other(), Color::Red);
    }

    #[test]
    fn cell_symbols() {
        assert_eq!(Cell::Empty.symbol(), '-');
        assert_eq!(Cell::Taken(Color::Red).symbol(), 'R');
        assert_eq!(Cell::Taken(Color::Black).symbol(), 'B');
    }

    #[test]
    fn cell_is_matches_owner_only() {
        assert!(Cell::Taken(Color::Red).is(Color::Red));
        assert!(!Cell::Taken(Color::Red).is(Color::Black));
        assert!(!Cell::Empty.is(Color::Red));
        assert!(!Cell::Empty.is(Color::Black));
    }
}
