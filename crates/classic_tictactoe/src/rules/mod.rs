//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from the engine so
//! the move selector can evaluate hypothetical boards with them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinLine, check_winner, completes_line, winning_line};

use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No line completed and at least one empty square.
    InProgress,
    /// `mark` completed `line`.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The first completed line in detection order.
        line: WinLine,
    },
    /// Full board, no line.
    Draw,
}

impl GameResult {
    /// Returns true while moves may still be made.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameResult::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self {
            GameResult::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates a board: first completed line wins, then draw, else in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some((mark, line)) = winning_line(board) {
        GameResult::Won { mark, line }
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
