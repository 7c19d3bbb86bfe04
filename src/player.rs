//! Move providers.
//!
//! A move provider supplies the next column choice for one seat. The
//! engine depends only on the [`MoveProvider`] trait, so a human at a
//! terminal, a random chooser, and a scripted sequence are all
//! interchangeable.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Color};

/// Supplies a column for the given color's move.
///
/// The returned column is a proposal: the engine re-validates it against
/// the board and asks again if it is out of range or full, so providers
/// are free to be board-naive.
pub trait MoveProvider {
    fn request_column(&mut self, color: Color, board: &Board) -> io::Result<usize>;
}

/// Forwards to a shared provider, letting two seats share one terminal.
impl<P: MoveProvider> MoveProvider for std::rc::Rc<std::cell::RefCell<P>> {
    fn request_column(&mut self, color: Color, board: &Board) -> io::Result<usize> {
        self.borrow_mut().request_column(color, board)
    }
}

/// A human at a terminal (or any line-based reader/writer pair).
///
/// Prompts with the active color's name, parses an integer column, and
/// re-prompts with a specific message on bad input, out-of-range columns,
/// and full columns. Input problems never escape the prompt loop; only an
/// I/O failure (e.g. EOF) does.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanPlayer { input, output }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a column",
            ));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> MoveProvider for HumanPlayer<R, W> {
    fn request_column(&mut self, color: Color, board: &Board) -> io::Result<usize> {
        loop {
            write!(self.output, "Player {} select a column: ", color.name())?;
            self.output.flush()?;
            let line = self.read_line()?;

            let col: usize = match line.trim().parse() {
                Ok(col) => col,
                Err(_) => {
                    writeln!(self.output, "Please enter a whole number")?;
                    continue;
                }
            };
            if col >= board.cols() {
                writeln!(self.output, "Selected column is out of bounds")?;
                continue;
            }
            if board.is_column_full(col) {
                writeln!(self.output, "Column is full select another column")?;
                continue;
            }
            return Ok(col);
        }
    }
}

/// An automated player that picks a uniformly random column.
///
/// Deliberately board-naive: it may pick a full column, relying on the
/// engine's validation to ask again. An optional fixed delay imitates
/// thinking time; the wait is a plain blocking sleep.
pub struct RandomPlayer {
    rng: SmallRng,
    delay: Duration,
}

impl RandomPlayer {
    /// Creates a player seeded from system entropy with the default
    /// one-second thinking delay.
    pub fn new() -> Self {
        RandomPlayer {
            rng: SmallRng::from_entropy(),
            delay: Duration::from_secs(1),
        }
    }

    /// Creates a deterministic player with no delay.
    pub fn seeded(seed: u64) -> Self {
        RandomPlayer {
            rng: SmallRng::seed_from_u64(seed),
            delay: Duration::ZERO,
        }
    }

    /// Overrides the thinking delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveProvider for RandomPlayer {
    fn request_column(&mut self, _color: Color, board: &Board) -> io::Result<usize> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        let col = self.rng.gen_range(0..board.cols());
        eprintln!("Player AI selected column at {}", col);
        Ok(col)
    }
}

/// Plays a fixed sequence of columns. Used by tests and scripted replays.
///
/// # Panics
///
/// Panics when asked for a move after the sequence is exhausted.
pub struct ScriptedPlayer {
    moves: Vec<usize>,
    next: usize,
}

impl ScriptedPlayer {
    pub fn new(moves: &[usize]) -> Self {
        ScriptedPlayer {
            moves: moves.to_vec(),
            next: 0,
        }
    }
}

impl MoveProvider for ScriptedPlayer {
    fn request_column(&mut self, color: Color, _board: &Board) -> io::Result<usize> {
        let col = *self
            .moves
            .get(self.next)
            .unwrap_or_else(|| panic!("script exhausted for player {}", color.name()));
        self.next += 1;
        Ok(col)
    }
}
