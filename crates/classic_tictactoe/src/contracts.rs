//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::error::MoveRejected;
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::mode::GameMode;
use super::{GameState, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Error returned when a precondition fails.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: a mode has been chosen.
pub struct ModeChosen;

impl ModeChosen {
    /// Rejects moves before a mode is selected.
    pub fn check(state: &GameState) -> Result<(), MoveRejected> {
        if state.mode() == GameMode::Unset {
            Err(MoveRejected::ModeUnset)
        } else {
            Ok(())
        }
    }
}

/// Precondition: no computer reply is waiting.
pub struct NoAiPending;

impl NoAiPending {
    /// Rejects moves while the computer is thinking.
    pub fn check(state: &GameState) -> Result<(), MoveRejected> {
        if state.ai_pending() {
            Err(MoveRejected::AiPending)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the game is still in progress.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects moves after a win or draw.
    pub fn check(state: &GameState) -> Result<(), MoveRejected> {
        if state.result().is_in_progress() {
            Ok(())
        } else {
            Err(MoveRejected::GameOver)
        }
    }
}

/// Precondition: in a vs-AI game the human only moves on their own turn.
pub struct HumansTurn;

impl HumansTurn {
    /// Rejects human moves during the computer's turn.
    pub fn check(state: &GameState) -> Result<(), MoveRejected> {
        if state.is_ai_turn() {
            Err(MoveRejected::NotYourTurn(state.turn().opponent()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto occupied squares.
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveRejected> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejected::SquareOccupied(pos))
        }
    }
}

/// Composite precondition for a human move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveRejected> {
        ModeChosen::check(state)?;
        NoAiPending::check(state)?;
        GameInProgress::check(state)?;
        HumansTurn::check(state)?;
        SquareIsEmpty::check(pos, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - A mode is chosen and no AI reply is pending
/// - The game is in progress and it is a human's turn
/// - Square must be empty
///
/// Postconditions:
/// - Exactly one snapshot was pushed, equal to the state before the move
/// - Board remains monotonic
/// - Marks still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    type Rejection = MoveRejected;

    fn pre(state: &GameState, action: &Position) -> Result<(), MoveRejected> {
        LegalMove::check(*action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = TicTacToeInvariants::check_all(after).err().unwrap_or_default();

        let pushed = after.history().len() == before.history().len() + 1
            && after.history().last().is_some_and(|entry| {
                entry.board == *before.board() && entry.turn == before.turn() && entry.result == *before.result()
            });
        if !pushed {
            violations.push(InvariantViolation::new(
                "History top is the state before the move",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Asserts that all game invariants hold (panic on violation in debug builds).
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    if let Err(violations) = TicTacToeInvariants::check_all(state) {
        for violation in &violations {
            warn!(%violation, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Invariant violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Square};

    fn two_player() -> GameState {
        GameState::new(GameMode::TwoPlayer)
    }

    #[test]
    fn test_precondition_empty_square() {
        assert!(MoveContract::pre(&two_player(), &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut state = two_player();
        state.place(Position::Center);
        assert_eq!(
            MoveContract::pre(&state, &Position::Center),
            Err(MoveRejected::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_mode_unset() {
        let state = GameState::new(GameMode::Unset);
        assert_eq!(
            MoveContract::pre(&state, &Position::Center),
            Err(MoveRejected::ModeUnset)
        );
    }

    #[test]
    fn test_precondition_ai_turn() {
        let mut state = GameState::new(GameMode::VsAi);
        state.place(Position::Center);
        assert_eq!(
            MoveContract::pre(&state, &Position::TopLeft),
            Err(MoveRejected::NotYourTurn(Mark::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = two_player();
        let mut after = before.clone();
        after.place(Position::Center);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = two_player();
        let mut after = before.clone();
        after.place(Position::Center);

        // Corrupt the board
        after.board.set(Position::TopLeft, Square::Occupied(Mark::O));

        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_missing_snapshot() {
        let before = two_player();
        let after = before.clone();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
