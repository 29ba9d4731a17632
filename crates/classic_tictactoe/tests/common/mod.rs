//! Shared helpers for engine integration tests.

#![allow(dead_code)]

use classic_tictactoe::{Board, GameEngine, Mark, Position};
use rand::RngCore;
use std::collections::VecDeque;

/// Random source that replays scripted words, then zeros.
///
/// A zero word makes `gen_bool(0.5)` true (the human opens) and makes
/// every uniform pick land on the first candidate. `u64::MAX` makes
/// `gen_bool(0.5)` false (the computer opens). Only script non-zero words
/// for coin flips: uniform picks reject saturated words and retry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    words: VecDeque<u64>,
}

impl ScriptedRng {
    pub fn new(words: impl IntoIterator<Item = u64>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// The computer wins the opening coin flip.
    pub fn ai_first() -> Self {
        Self::new([u64::MAX])
    }

    /// The human wins the opening coin flip.
    pub fn human_first() -> Self {
        Self::new([0])
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.words.pop_front().unwrap_or(0)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand::rngs::mock::StepRng::new(0, 0).fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub fn engine(rng: ScriptedRng) -> GameEngine<ScriptedRng> {
    GameEngine::with_rng(rng)
}

/// Builds a board from `(index, mark)` pairs.
pub fn board(marks: &[(usize, Mark)]) -> Board {
    marks
        .iter()
        .map(|(i, m)| (Position::from_index(*i).expect("index on board"), *m))
        .collect()
}
