//! Complete game state and the read-only view handed to front ends.

use super::history::{HistoryEntry, HistoryStack};
use super::mode::{self, GameMode, Role};
use super::rules::{self, GameResult, WinLine};
use super::{Board, Mark, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything that undo and the invariants reason about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current mode.
    pub(crate) mode: GameMode,
    /// The board.
    pub(crate) board: Board,
    /// Mark to play next.
    pub(crate) turn: Mark,
    /// Result of the last evaluation.
    pub(crate) result: GameResult,
    /// One snapshot per applied move.
    pub(crate) history: HistoryStack,
    /// Who moved first in a vs-AI game.
    pub(crate) first_mover: Option<Role>,
    /// True while the computer's reply waits to be resolved.
    pub(crate) ai_pending: bool,
}

impl GameState {
    /// Creates a fresh game in `mode` with X to move.
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            board: Board::new(),
            turn: Mark::X,
            result: GameResult::InProgress,
            history: HistoryStack::new(),
            first_mover: None,
            ai_pending: false,
        }
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to play next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game result.
    pub fn result(&self) -> &GameResult {
        &self.result
    }

    /// Returns the undo history.
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Returns true while the computer's reply waits to be resolved.
    pub fn ai_pending(&self) -> bool {
        self.ai_pending
    }

    /// Returns true if, in a vs-AI game still in progress, the computer is to move.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::VsAi && self.result.is_in_progress() && Role::of(self.turn) == Role::Ai
    }

    /// Places the current mark at `pos`, recording a snapshot first.
    ///
    /// Turn only flips while the game is still in progress.
    pub(crate) fn place(&mut self, pos: Position) {
        self.history.push(self.snapshot());
        self.board.set(pos, Square::Occupied(self.turn));
        self.result = rules::evaluate(&self.board);
        if self.result.is_in_progress() {
            self.turn = self.turn.opponent();
        }
    }

    /// Restores the newest snapshot.
    pub(crate) fn restore_last(&mut self) -> Option<HistoryEntry> {
        let entry = self.history.pop()?;
        self.board = entry.board.clone();
        self.turn = entry.turn;
        self.result = entry.result;
        Some(entry)
    }

    fn snapshot(&self) -> HistoryEntry {
        HistoryEntry {
            board: self.board.clone(),
            turn: self.turn,
            result: self.result,
        }
    }

    /// Builds the read-only view for front ends.
    pub fn view(&self) -> GameView {
        GameView {
            mode: self.mode,
            board: self.board.clone(),
            turn: self.turn,
            turn_label: mode::label(self.mode, self.turn),
            status: mode::status_text(self.mode, &self.result, self.turn),
            result: self.result,
            winning_line: self.result.winning_line(),
            history_len: self.history.len(),
            ai_pending: self.ai_pending,
            first_mover: self.first_mover,
        }
    }
}

/// Snapshot of everything a front end renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Current mode.
    mode: GameMode,
    /// The board.
    board: Board,
    /// Mark to play next.
    turn: Mark,
    /// Display label of the side to play.
    #[getter(skip)]
    turn_label: &'static str,
    /// Status line ("X's Turn", "AI Wins!", ...).
    status: String,
    /// Game result.
    result: GameResult,
    /// Line to highlight, if the game was won.
    winning_line: Option<WinLine>,
    /// Number of undoable moves.
    history_len: usize,
    /// True while input should be disabled for the computer's reply.
    ai_pending: bool,
    /// Who moved first in a vs-AI game.
    first_mover: Option<Role>,
}

impl GameView {
    /// Display label of the side to play ("X", "O", "Player" or "AI").
    pub fn turn_label(&self) -> &'static str {
        self.turn_label
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }

    /// Returns true if undo is currently available.
    pub fn can_undo(&self) -> bool {
        self.history_len > 0 && !self.ai_pending
    }

    /// Label for the undo control.
    pub fn undo_label(&self) -> String {
        mode::undo_label(self.history_len)
    }
}
