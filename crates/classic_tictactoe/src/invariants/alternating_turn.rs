//! Alternating turn invariant: marks alternate and the turn follows the counts.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: Marks alternate.
///
/// Each snapshot's turn is the opposite of the previous one, the mark
/// counts never differ by more than one, and the live turn is the mark
/// that restores balance. Vs-AI games may open with O, so the side that
/// moved first is read from the oldest snapshot.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let entries = state.history().entries();

        if entries.windows(2).any(|w| w[0].turn == w[1].turn) {
            return false;
        }

        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        if x.abs_diff(o) > 1 {
            return false;
        }

        if !state.result().is_in_progress() {
            return true;
        }

        let opener = entries.first().map_or(state.turn(), |e| e.turn);
        let expected = if entries.len() % 2 == 0 { opener } else { opener.opponent() };
        state.turn() == expected
    }

    fn description() -> &'static str {
        "Marks alternate turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Position};

    #[test]
    fn test_empty_game_holds() {
        let state = GameState::new(GameMode::TwoPlayer);
        assert!(AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut state = GameState::new(GameMode::TwoPlayer);
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ] {
            state.place(pos);
        }
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.turn(), Mark::O);
    }

    #[test]
    fn test_o_opening_holds() {
        let mut state = GameState::new(GameMode::VsAi);
        state.turn = Mark::O;
        state.place(Position::Center);
        state.place(Position::TopLeft);
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.turn(), Mark::O);
    }

    #[test]
    fn test_skipped_turn_violates() {
        let mut state = GameState::new(GameMode::TwoPlayer);
        state.place(Position::Center);
        state.turn = Mark::X;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
