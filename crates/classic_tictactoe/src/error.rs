//! Rejection types for engine operations.
//!
//! A rejected call leaves the engine exactly as it was; the value only says why.

use super::{Mark, Position};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// No game mode has been chosen yet.
    #[display("Choose a game mode before moving")]
    ModeUnset,

    /// The index is not a board square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The computer opponent's move has not been resolved yet.
    #[display("Waiting for the AI to move")]
    AiPending,

    /// It is the computer's turn, not the human's.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Mark),
}

impl std::error::Error for MoveRejected {}

/// Why an undo was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum UndoRejected {
    /// Nothing to undo.
    #[display("No moves to undo")]
    EmptyHistory,

    /// The computer opponent's move has not been resolved yet.
    #[display("Waiting for the AI to move")]
    AiPending,
}

impl std::error::Error for UndoRejected {}

/// Why an AI move could not be scheduled or resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AiMoveRejected {
    /// The game is not against the computer.
    #[display("The AI only plays in vs-AI mode")]
    NotVsAi,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It is the human's turn.
    #[display("It's the player's turn")]
    NotAiTurn,

    /// An AI move is already waiting to be resolved.
    #[display("An AI move is already pending")]
    AlreadyPending,

    /// There is no pending AI move to resolve.
    #[display("No AI move is pending")]
    NothingPending,
}

impl std::error::Error for AiMoveRejected {}

/// Error returned by the move selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// The board is full.
    #[display("No legal move: the board is full")]
    NoLegalMove,
}

impl std::error::Error for SelectError {}
