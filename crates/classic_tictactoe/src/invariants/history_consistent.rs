//! History consistency invariant: history length matches occupied squares.

use super::super::GameState;
use super::Invariant;

/// Invariant: History length equals number of occupied squares.
///
/// Every snapshot corresponds to exactly one placed mark, so undo can
/// always walk back to the empty board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().len() == state.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
