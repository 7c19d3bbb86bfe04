//! Game engine and turn state machine.
//!
//! Owns the board, alternates turns between the two players' move
//! providers, validates every proposed column before it touches the
//! board, and tracks the game status until a win or draw.

use std::io::{self, Write};

use crate::board::{Board, BoardError, Color};
use crate::display;
use crate::player::MoveProvider;
use crate::win::has_win;

/// Where the game stands. Transitions from `InProgress` to a terminal
/// state at most once; the engine requests no moves afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    WonBy(Color),
    Drawn,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Board dimensions and seating options for a new game.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Whether the second mover (Red) is an automated player.
    pub automated_red: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 10,
            cols: 10,
            automated_red: true,
        }
    }
}

/// Runs a single game of Connect Four.
///
/// Black always moves first (odd turns); Red moves second. The engine
/// depends only on the [`MoveProvider`] trait, so human and automated
/// players are interchangeable.
pub struct GameEngine {
    board: Board,
    status: GameStatus,
    turn: usize,
    black: Box<dyn MoveProvider>,
    red: Box<dyn MoveProvider>,
}

impl GameEngine {
    /// Creates a new engine with an empty board. Fails if the requested
    /// dimensions are below the 4x4 minimum; no turn is ever played on an
    /// invalid board.
    pub fn new(
        config: &GameConfig,
        black: Box<dyn MoveProvider>,
        red: Box<dyn MoveProvider>,
    ) -> Result<GameEngine, BoardError> {
        Ok(GameEngine {
            board: Board::new(config.rows, config.cols)?,
            status: GameStatus::InProgress,
            turn: 1,
            black,
            red,
        })
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The turn about to be played (1-based).
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The color to move on the current turn: Black on odd turns.
    pub fn active_color(&self) -> Color {
        if self.turn % 2 == 1 {
            Color::Black
        } else {
            Color::Red
        }
    }

    /// Requests a column from `provider` until it names a legal one.
    ///
    /// Every provider's output is re-validated here regardless of kind;
    /// an automated player may propose a full column and a human player's
    /// own prompt loop could race against this check, so the engine never
    /// trusts either. Illegal proposals are logged and re-requested.
    fn request_legal_column(
        provider: &mut dyn MoveProvider,
        color: Color,
        board: &Board,
    ) -> io::Result<usize> {
        loop {
            let col = provider.request_column(color, board)?;
            if board.is_legal_column(col) {
                return Ok(col);
            }
            eprintln!(
                "Player {} proposed illegal column {}, asking again",
                color.name(),
                col
            );
        }
    }

    /// Plays one turn: obtains a legal column from the active player's
    /// provider, applies the drop, and updates the game status. Does
    /// nothing once the game is over.
    pub fn play_turn(&mut self) -> io::Result<GameStatus> {
        if self.status.is_over() {
            return Ok(self.status);
        }

        let color = self.active_color();
        let provider = match color {
            Color::Black => self.black.as_mut(),
            Color::Red => self.red.as_mut(),
        };
        let col = Self::request_legal_column(provider, color, &self.board)?;

        // The column was validated above, so the drop cannot fail.
        let landing = match self.board.drop_piece(col, color) {
            Ok(landing) => landing,
            Err(e) => unreachable!("validated drop failed: {}", e),
        };

        if has_win(&self.board, landing, color) {
            self.status = GameStatus::WonBy(color);
        } else if self.turn == self.board.capacity() {
            self.status = GameStatus::Drawn;
        } else {
            self.turn += 1;
        }
        Ok(self.status)
    }

    /// Plays the game to completion, rendering the board after every move
    /// and announcing the outcome on `out`.
    pub fn play<W: Write>(&mut self, out: &mut W) -> io::Result<GameStatus> {
        writeln!(out, "Game starting ...")?;
        out.flush()?;
        while !self.status.is_over() {
            let status = self.play_turn()?;
            display::render(&self.board, out)?;
            match status {
                GameStatus::WonBy(color) => {
                    writeln!(out, "Game Over: Player {} wins!", color.name())?;
                }
                GameStatus::Drawn => {
                    writeln!(out, "Game Over: Tie game. No more moves remaining.")?;
                }
                GameStatus::InProgress => {}
            }
            // Flush per turn so prompts interleave correctly with a
            // buffered sink.
            out.flush()?;
        }
        writeln!(out, "Game over! Thanks for playing :)")?;
        out.flush()?;
        Ok(self.status)
    }
}
