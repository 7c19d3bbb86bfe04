//! Board representation and cell types.
//!
//! Contains the core data structures for player colors, cells, and the
//! gravity-fed grid the game is played on.

pub mod cell;
pub mod grid;

pub use cell::{Cell, Color};
pub use grid::{Board, BoardError, Landing, MIN_DIMENSION};
