//! Game modes and the labels derived from them.
//!
//! Labels are never stored: they are computed from the mode and the mark,
//! so they cannot drift from the board.

use super::rules::GameResult;
use super::Mark;
use serde::{Deserialize, Serialize};

/// Who the opponent is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// No mode chosen yet; moves are rejected.
    #[default]
    Unset,
    /// Two humans share the board as X and O.
    TwoPlayer,
    /// A human (X) plays the computer (O).
    VsAi,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Unset => "Mode selection",
            GameMode::TwoPlayer => "Two Player Game",
            GameMode::VsAi => "Play with AI",
        }
    }
}

/// Which side of a vs-AI game a mark belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Role {
    /// The human player.
    #[display("Player")]
    Human,
    /// The computer opponent.
    #[display("AI")]
    Ai,
}

impl Role {
    /// The human always plays X.
    pub const HUMAN_MARK: Mark = Mark::X;
    /// The computer always plays O.
    pub const AI_MARK: Mark = Mark::O;

    /// Returns the role that plays `mark`.
    pub fn of(mark: Mark) -> Self {
        if mark == Self::AI_MARK { Role::Ai } else { Role::Human }
    }

    /// Returns the mark this role plays.
    pub fn mark(self) -> Mark {
        match self {
            Role::Human => Self::HUMAN_MARK,
            Role::Ai => Self::AI_MARK,
        }
    }
}

/// Display label for the side playing `mark`.
///
/// Two-player games use the literal marks; vs-AI games use "Player" and "AI".
pub fn label(mode: GameMode, mark: Mark) -> &'static str {
    match (mode, mark) {
        (GameMode::VsAi, mark) => match Role::of(mark) {
            Role::Human => "Player",
            Role::Ai => "AI",
        },
        (_, Mark::X) => "X",
        (_, Mark::O) => "O",
    }
}

/// Status line shown above the board.
pub fn status_text(mode: GameMode, result: &GameResult, turn: Mark) -> String {
    match result {
        GameResult::Draw => "It's a Draw! 🤝".to_string(),
        GameResult::Won { mark, .. } => format!("{} Wins!", label(mode, *mark)),
        GameResult::InProgress => format!("{}'s Turn", label(mode, turn)),
    }
}

/// Label for the undo control.
pub fn undo_label(history_len: usize) -> String {
    format!("Undo Move ({} moves)", history_len)
}
