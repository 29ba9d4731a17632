//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameState, Mark, Position, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Walking the snapshots oldest to newest and ending at the live board,
/// each step fills exactly one empty square and touches nothing else.
pub struct MonotonicBoardInvariant;

impl MonotonicBoardInvariant {
    /// True if `after` is `before` plus one `mark` on a previously empty square.
    fn single_fill(before: &Board, after: &Board, mark: Mark) -> bool {
        let mut filled = 0;
        for pos in Position::ALL {
            match (before.get(pos), after.get(pos)) {
                (a, b) if a == b => {}
                (Square::Empty, Square::Occupied(placed)) if placed == mark => filled += 1,
                _ => return false,
            }
        }
        filled == 1
    }
}

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let entries = state.history().entries();

        if entries.first().is_some_and(|e| e.board.occupied() != 0) {
            return false;
        }

        let afters = entries
            .iter()
            .skip(1)
            .map(|e| &e.board)
            .chain(std::iter::once(state.board()));

        entries
            .iter()
            .zip(afters)
            .all(|(before, after)| Self::single_fill(&before.board, after, before.turn))
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
