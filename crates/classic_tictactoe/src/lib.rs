//! Classic tic-tac-toe game engine.
//!
//! Pure game state: no rendering, no I/O. A front end drives a
//! [`GameEngine`] and renders the [`GameView`] it returns.
//!
//! # Architecture
//!
//! - **Engine**: turn order, undo history, pacing of the computer's replies
//! - **Rules**: win and draw detection over a [`Board`]
//! - **Selector**: greedy heuristic opponent
//! - **Contracts/Invariants**: pre- and postconditions checked on every move
//!
//! # Example
//!
//! ```
//! use classic_tictactoe::{GameEngine, GameMode, GameResult, WinLine, Mark};
//!
//! let mut engine = GameEngine::with_seed(7);
//! engine.new_game(GameMode::TwoPlayer);
//! for cell in [0, 4, 1, 5] {
//!     engine.apply_move(cell).unwrap();
//! }
//! let view = engine.apply_move(2).unwrap();
//! assert_eq!(view.result(), &GameResult::Won { mark: Mark::X, line: WinLine::TopRow });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod engine;
mod error;
mod history;
mod invariants;
mod mode;
mod position;
mod rules;
mod selector;
mod state;
mod types;

pub use contracts::{Contract, LegalMove, MoveContract, assert_invariants};
pub use engine::{AiPacing, GameEngine};
pub use error::{AiMoveRejected, MoveRejected, SelectError, UndoRejected};
pub use history::{HistoryEntry, HistoryStack};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, TicTacToeInvariants,
};
pub use mode::{GameMode, Role, label, status_text, undo_label};
pub use position::Position;
pub use rules::{GameResult, WinLine, check_winner, completes_line, evaluate, is_draw, is_full, winning_line};
pub use selector::{Heuristic, MoveSelector};
pub use state::{GameState, GameView};
pub use types::{Board, Mark, Square};
