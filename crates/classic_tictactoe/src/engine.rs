//! Game engine: turn order, undo, and the computer opponent.
//!
//! The engine owns a [`GameState`] and a random source. Every public
//! operation either succeeds and returns a fresh [`GameView`] or is
//! rejected and leaves the state untouched.

use super::contracts::{Contract, MoveContract, assert_invariants};
use super::error::{AiMoveRejected, MoveRejected, UndoRejected};
use super::mode::{GameMode, Role};
use super::selector::MoveSelector;
use super::state::{GameState, GameView};
use super::{Mark, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

/// When the computer's reply is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiPacing {
    /// The reply is played inside the call that triggered it.
    #[default]
    Immediate,
    /// The engine marks the reply pending; the caller plays it with
    /// [`GameEngine::resolve_ai_move`] after whatever delay it wants.
    Deferred,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    state: GameState,
    pacing: AiPacing,
    selector: MoveSelector,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Creates an engine in mode selection, seeded from the OS.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an engine with a seeded random source (for reproducible games).
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameEngine<R> {
    /// Creates an engine in mode selection using `rng` for every random choice.
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: GameState::new(GameMode::Unset),
            pacing: AiPacing::default(),
            selector: MoveSelector::new(Role::AI_MARK),
            rng,
        }
    }

    /// Sets the pacing policy for computer replies.
    pub fn with_pacing(mut self, pacing: AiPacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the view a front end renders.
    pub fn view(&self) -> GameView {
        self.state.view()
    }

    /// Starts a fresh game in `mode`, cancelling any pending AI move.
    ///
    /// In vs-AI mode a coin flip decides who opens. If the computer opens,
    /// its move is recorded in history so undo returns to the empty board.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, mode: GameMode) -> GameView {
        self.state = GameState::new(mode);

        if mode == GameMode::VsAi {
            let first = if self.rng.gen_bool(0.5) { Role::Human } else { Role::Ai };
            self.state.first_mover = Some(first);
            self.state.turn = first.mark();
            info!(first_mover = %first, "Starting vs-AI game");
            if first == Role::Ai {
                self.schedule_ai_move();
            }
        } else {
            info!(mode = mode.name(), "Starting game");
        }

        self.view()
    }

    /// Starts a fresh game in the current mode.
    pub fn restart(&mut self) -> GameView {
        self.new_game(self.state.mode)
    }

    /// Abandons the game and returns to mode selection.
    pub fn back_to_mode_selection(&mut self) -> GameView {
        self.new_game(GameMode::Unset)
    }

    /// Places the current mark at board index `cell` (0-8).
    ///
    /// In vs-AI mode a successful human move that leaves the game running
    /// hands the turn to the computer (see [`AiPacing`]).
    ///
    /// # Errors
    ///
    /// Returns a [`MoveRejected`] and leaves the state unchanged if the mode is
    /// unset, the index is off the board, the square is taken, the game is
    /// over, an AI reply is pending, or it is the computer's turn.
    #[instrument(skip(self), fields(turn = %self.state.turn))]
    pub fn apply_move(&mut self, cell: usize) -> Result<GameView, MoveRejected> {
        let pos = Position::from_index(cell).ok_or(MoveRejected::OutOfBounds(cell))?;
        MoveContract::pre(&self.state, &pos).inspect_err(|reason| {
            debug!(%reason, "Move rejected");
        })?;

        self.place(pos);

        if self.state.is_ai_turn() {
            self.schedule_ai_move();
        }

        Ok(self.view())
    }

    /// Reverts the most recent move, human or computer.
    ///
    /// # Errors
    ///
    /// Returns [`UndoRejected`] if there is nothing to undo or an AI reply is pending.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<GameView, UndoRejected> {
        if self.state.ai_pending {
            debug!("Undo rejected while AI is pending");
            return Err(UndoRejected::AiPending);
        }
        let entry = self.state.restore_last().ok_or(UndoRejected::EmptyHistory)?;
        debug!(turn = %entry.turn, remaining = self.state.history.len(), "Undid move");
        Ok(self.view())
    }

    /// Undoes back to the last point where a human was to move.
    ///
    /// In two-player mode this is a single undo. In vs-AI mode it also takes
    /// back the computer's reply, stopping early if history runs out.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::undo`] for the first step.
    #[instrument(skip(self))]
    pub fn undo_turn(&mut self) -> Result<GameView, UndoRejected> {
        let mut view = self.undo()?;
        while self.state.mode == GameMode::VsAi
            && Role::of(self.state.turn) == Role::Ai
            && !self.state.history.is_empty()
        {
            view = self.undo()?;
        }
        Ok(view)
    }

    /// Returns the cell the computer would play on the current board.
    ///
    /// Does not touch the board. Returns `None` once the game is over.
    pub fn compute_ai_move(&mut self) -> Option<usize> {
        if !self.state.result.is_in_progress() {
            return None;
        }
        self.selector
            .select(&self.state.board, &mut self.rng)
            .ok()
            .map(Position::to_index)
    }

    /// Asks the computer to move when undo has left it on turn.
    ///
    /// # Errors
    ///
    /// Returns [`AiMoveRejected`] unless this is a vs-AI game in progress,
    /// the computer is to move, and no reply is already pending.
    #[instrument(skip(self))]
    pub fn request_ai_move(&mut self) -> Result<GameView, AiMoveRejected> {
        if self.state.mode != GameMode::VsAi {
            return Err(AiMoveRejected::NotVsAi);
        }
        if !self.state.result.is_in_progress() {
            return Err(AiMoveRejected::GameOver);
        }
        if self.state.ai_pending {
            return Err(AiMoveRejected::AlreadyPending);
        }
        if !self.state.is_ai_turn() {
            return Err(AiMoveRejected::NotAiTurn);
        }
        self.schedule_ai_move();
        Ok(self.view())
    }

    /// Plays the pending computer reply.
    ///
    /// # Errors
    ///
    /// Returns [`AiMoveRejected::NothingPending`] if no reply is waiting.
    #[instrument(skip(self))]
    pub fn resolve_ai_move(&mut self) -> Result<GameView, AiMoveRejected> {
        if !self.state.ai_pending {
            return Err(AiMoveRejected::NothingPending);
        }
        self.state.ai_pending = false;
        self.play_ai_move();
        Ok(self.view())
    }

    fn schedule_ai_move(&mut self) {
        match self.pacing {
            AiPacing::Immediate => self.play_ai_move(),
            AiPacing::Deferred => {
                debug!("AI move pending");
                self.state.ai_pending = true;
            }
        }
    }

    fn play_ai_move(&mut self) {
        match self.selector.select_with_reason(&self.state.board, &mut self.rng) {
            Ok((pos, heuristic)) => {
                info!(mark = %self.selector.mark(), position = %pos, %heuristic, "AI moves");
                self.place(pos);
            }
            Err(e) => warn!(error = %e, "AI could not move"),
        }
    }

    fn place(&mut self, pos: Position) {
        let before = cfg!(debug_assertions).then(|| self.state.clone());
        let mark: Mark = self.state.turn;

        self.state.place(pos);
        debug!(position = %pos, %mark, result = ?self.state.result, "Placed mark");

        if let Some(before) = before {
            let post = MoveContract::post(&before, &self.state);
            debug_assert!(post.is_ok(), "Postcondition failed: {:?}", post);
        }
        assert_invariants(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameResult;
    use rand::rngs::mock::StepRng;

    /// A zeroed source: the human opens every vs-AI game and the
    /// computer always takes the first free candidate.
    fn engine() -> GameEngine<StepRng> {
        GameEngine::with_rng(StepRng::new(0, 0))
    }

    #[test]
    fn test_new_engine_awaits_mode() {
        let mut engine = engine();
        assert_eq!(engine.view().mode(), &GameMode::Unset);
        assert_eq!(engine.apply_move(4), Err(MoveRejected::ModeUnset));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = engine();
        engine.new_game(GameMode::TwoPlayer);
        assert_eq!(engine.apply_move(9), Err(MoveRejected::OutOfBounds(9)));
    }

    #[test]
    fn test_vs_ai_reply_is_immediate_by_default() {
        let mut engine = engine();
        let view = engine.new_game(GameMode::VsAi);
        assert_eq!(view.first_mover(), &Some(Role::Human));

        let view = engine.apply_move(0).unwrap();
        // Center is free, so the computer takes it.
        assert_eq!(view.board().get(Position::Center), crate::Square::Occupied(Mark::O));
        assert_eq!(view.turn(), &Mark::X);
        assert_eq!(view.history_len(), &2);
        assert!(!*view.ai_pending());
    }

    #[test]
    fn test_deferred_reply_blocks_input_until_resolved() {
        let mut engine = engine().with_pacing(AiPacing::Deferred);
        engine.new_game(GameMode::VsAi);

        let view = engine.apply_move(0).unwrap();
        assert!(*view.ai_pending());
        assert_eq!(engine.apply_move(1), Err(MoveRejected::AiPending));
        assert_eq!(engine.undo(), Err(UndoRejected::AiPending));

        let view = engine.resolve_ai_move().unwrap();
        assert!(!*view.ai_pending());
        assert_eq!(view.history_len(), &2);
        assert_eq!(engine.resolve_ai_move(), Err(AiMoveRejected::NothingPending));
    }

    #[test]
    fn test_restart_cancels_pending_reply() {
        let mut engine = engine().with_pacing(AiPacing::Deferred);
        engine.new_game(GameMode::VsAi);
        engine.apply_move(0).unwrap();

        let view = engine.restart();
        assert!(!*view.ai_pending());
        assert_eq!(view.history_len(), &0);
        assert_eq!(view.result(), &GameResult::InProgress);
    }

    #[test]
    fn test_undo_turn_takes_back_reply_and_move() {
        let mut engine = engine();
        engine.new_game(GameMode::VsAi);
        engine.apply_move(0).unwrap();

        let view = engine.undo_turn().unwrap();
        assert_eq!(view.history_len(), &0);
        assert_eq!(view.board(), &crate::Board::new());
        assert_eq!(view.turn(), &Mark::X);
    }

    #[test]
    fn test_undo_turn_stops_at_empty_history() {
        // A saturated source loses the coin flip, so the computer opens.
        let mut engine = GameEngine::with_rng(StepRng::new(u64::MAX, 0));
        let view = engine.new_game(GameMode::VsAi);
        assert_eq!(view.first_mover(), &Some(Role::Ai));

        let view = engine.undo_turn().unwrap();
        assert_eq!(view.history_len(), &0);
        assert_eq!(view.turn(), &Mark::O);
        assert_eq!(engine.undo_turn(), Err(UndoRejected::EmptyHistory));
    }

    #[test]
    fn test_request_ai_move_after_single_undo() {
        let mut engine = engine();
        engine.new_game(GameMode::VsAi);
        engine.apply_move(0).unwrap();

        // Single undo leaves the computer on turn.
        let view = engine.undo().unwrap();
        assert_eq!(view.turn(), &Mark::O);
        assert_eq!(engine.apply_move(8), Err(MoveRejected::NotYourTurn(Mark::X)));

        let view = engine.request_ai_move().unwrap();
        assert_eq!(view.turn(), &Mark::X);
        assert_eq!(view.history_len(), &2);
        assert_eq!(engine.request_ai_move(), Err(AiMoveRejected::NotAiTurn));
    }

    #[test]
    fn test_request_ai_move_outside_vs_ai() {
        let mut engine = engine();
        engine.new_game(GameMode::TwoPlayer);
        assert_eq!(engine.request_ai_move(), Err(AiMoveRejected::NotVsAi));
    }

    #[test]
    fn test_compute_ai_move_does_not_touch_board() {
        let mut engine = engine();
        engine.new_game(GameMode::TwoPlayer);
        engine.apply_move(0).unwrap();
        engine.apply_move(4).unwrap();

        let before = engine.view();
        assert!(engine.compute_ai_move().is_some());
        assert_eq!(engine.view(), before);
    }

    #[test]
    fn test_compute_ai_move_after_win() {
        let mut engine = engine();
        engine.new_game(GameMode::TwoPlayer);
        for cell in [0, 4, 1, 5, 2] {
            engine.apply_move(cell).unwrap();
        }
        // Four squares are still empty, but the game is decided.
        assert_eq!(engine.compute_ai_move(), None);
    }
}
