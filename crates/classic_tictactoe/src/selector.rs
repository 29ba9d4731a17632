//! Heuristic move selection for the computer opponent.
//!
//! A greedy one-ply heuristic: win if possible, otherwise block, otherwise
//! prefer center, corners, then edges. It does not search the game tree and
//! can be beaten.

use super::error::SelectError;
use super::rules::completes_line;
use super::{Board, Mark, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which priority step produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Heuristic {
    /// Completes one of our own lines.
    #[display("win")]
    Win,
    /// Occupies the square the opponent needs to complete a line.
    #[display("block")]
    Block,
    /// Takes the center.
    #[display("center")]
    Center,
    /// Takes a random free corner.
    #[display("corner")]
    Corner,
    /// Takes a random free edge.
    #[display("edge")]
    Edge,
}

/// Picks moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSelector {
    mark: Mark,
}

impl MoveSelector {
    /// Creates a selector playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    /// The mark this selector plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Selects a move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoLegalMove`] if the board is full.
    pub fn select<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Result<Position, SelectError> {
        self.select_with_reason(board, rng).map(|(pos, _)| pos)
    }

    /// Selects a move and reports which heuristic chose it.
    #[instrument(skip(self, board, rng), fields(mark = %self.mark))]
    pub fn select_with_reason<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<(Position, Heuristic), SelectError> {
        let open = Position::valid_moves(board);
        if open.is_empty() {
            return Err(SelectError::NoLegalMove);
        }

        let choice = if let Some(pos) = first_completing(board, &open, self.mark) {
            (pos, Heuristic::Win)
        } else if let Some(pos) = first_completing(board, &open, self.mark.opponent()) {
            (pos, Heuristic::Block)
        } else if board.is_empty(Position::Center) {
            (Position::Center, Heuristic::Center)
        } else if let Some(pos) = pick_free(board, &Position::CORNERS, rng) {
            (pos, Heuristic::Corner)
        } else if let Some(pos) = pick_free(board, &Position::EDGES, rng) {
            (pos, Heuristic::Edge)
        } else {
            // Center, corners and edges cover every square.
            return Err(SelectError::NoLegalMove);
        };

        debug!(position = %choice.0, heuristic = %choice.1, "Selected move");
        Ok(choice)
    }
}

/// First open square, in ascending order, where `mark` would complete a line.
fn first_completing(board: &Board, open: &[Position], mark: Mark) -> Option<Position> {
    open.iter().copied().find(|pos| completes_line(board, *pos, mark))
}

/// Uniformly random free square among `candidates`.
fn pick_free<R: Rng + ?Sized>(board: &Board, candidates: &[Position], rng: &mut R) -> Option<Position> {
    let free: Vec<Position> = candidates
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    free.choose(rng).copied()
}
