//! Fourstack engine library.
//!
//! Exposes the board representation, win detection, game engine, and
//! player modules for use by integration tests and the binary entry point.

pub mod board;
pub mod display;
pub mod engine;
pub mod player;
pub mod win;
