//! Undo history: one snapshot per applied move.

use super::rules::GameResult;
use super::{Board, Mark};
use serde::{Deserialize, Serialize};

/// State captured immediately before a move was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board before the move.
    pub board: Board,
    /// Mark that was about to play.
    pub turn: Mark,
    /// Result before the move (always in progress for legal play).
    pub result: GameResult,
}

/// Stack of snapshots, newest last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
}

impl HistoryStack {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a snapshot.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Removes and returns the newest snapshot.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// Returns the newest snapshot.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Number of moves recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no moves are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshots from oldest to newest.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
