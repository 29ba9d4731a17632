//! Line-based game session driving the engine.
//!
//! The session owns AI pacing: the engine is run with deferred replies and
//! the session sleeps for the configured delay before resolving each one.

use crate::announce;
use crate::render;
use anyhow::Result;
use classic_tictactoe::{GameEngine, GameMode, GameView, Position};
use rand::Rng;
use rand::rngs::StdRng;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a game in this mode.
    Start(GameMode),
    /// Play at a board index (0-8).
    Play(usize),
    /// Take back a move (a whole turn against the AI).
    Undo,
    /// New game in the same mode.
    Restart,
    /// Back to mode selection.
    Menu,
    /// Print the current view as JSON.
    Json,
    /// Print key help.
    Help,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parses a line of input. `in_menu` selects the menu vocabulary.
    pub fn parse(line: &str, in_menu: bool) -> Option<Self> {
        let line = line.trim().to_lowercase();
        if in_menu {
            return match line.as_str() {
                "1" => Some(Self::Start(GameMode::TwoPlayer)),
                "2" => Some(Self::Start(GameMode::VsAi)),
                "q" | "quit" => Some(Self::Quit),
                _ => None,
            };
        }

        match line.as_str() {
            "u" | "undo" => Some(Self::Undo),
            "r" | "restart" => Some(Self::Restart),
            "m" | "menu" => Some(Self::Menu),
            "j" | "json" => Some(Self::Json),
            "h" | "help" | "?" => Some(Self::Help),
            "q" | "quit" => Some(Self::Quit),
            other => Position::from_label_or_number(other).map(|pos| Self::Play(pos.to_index())),
        }
    }
}

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// Interactive session over a line source and a writer.
pub struct Session<W, R = StdRng> {
    engine: GameEngine<R>,
    ai_delay: Duration,
    announce_rng: StdRng,
    out: W,
}

impl<W: Write, R: Rng> Session<W, R> {
    /// Creates a session. The engine should use deferred AI pacing.
    pub fn new(engine: GameEngine<R>, ai_delay: Duration, announce_rng: StdRng, out: W) -> Self {
        Self {
            engine,
            ai_delay,
            announce_rng,
            out,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.out
    }

    fn in_menu(&self) -> bool {
        self.engine.state().mode() == GameMode::Unset
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    pub async fn run<I: AsyncBufRead + Unpin>(&mut self, input: I, start: Option<GameMode>) -> Result<()> {
        info!("Session started");
        match start {
            Some(mode) => self.start(mode).await?,
            None => writeln!(self.out, "{}", render::menu())?,
        }

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if self.handle_line(&line).await? == Flow::Quit {
                break;
            }
        }

        info!("Session ended");
        Ok(())
    }

    /// Handles one line of input.
    #[instrument(skip(self))]
    pub async fn handle_line(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let Some(command) = Command::parse(line, self.in_menu()) else {
            debug!("Unrecognized input");
            if self.in_menu() {
                writeln!(self.out, "Pick 1 or 2.\n{}", render::menu())?;
            } else {
                writeln!(self.out, "{}", render::help(self.engine.state().mode()))?;
            }
            return Ok(Flow::Continue);
        };

        match command {
            Command::Start(mode) => self.start(mode).await?,
            Command::Play(cell) => self.play(cell).await?,
            Command::Undo => self.undo().await?,
            Command::Restart => {
                let view = self.engine.restart();
                self.show(&view)?;
                self.settle_ai().await?;
            }
            Command::Menu => {
                self.engine.back_to_mode_selection();
                writeln!(self.out, "{}", render::menu())?;
            }
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.engine.view())?;
                writeln!(self.out, "{json}")?;
            }
            Command::Help => {
                writeln!(self.out, "{}", render::help(self.engine.state().mode()))?;
            }
            Command::Quit => {
                writeln!(self.out, "Bye!")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    async fn start(&mut self, mode: GameMode) -> Result<()> {
        let view = self.engine.new_game(mode);
        writeln!(self.out, "{}", render::help(mode))?;
        if let Some(first) = view.first_mover() {
            writeln!(self.out, "Coin flip: {first} moves first.")?;
        }
        self.show(&view)?;
        self.settle_ai().await
    }

    async fn play(&mut self, cell: usize) -> Result<()> {
        match self.engine.apply_move(cell) {
            Ok(view) => {
                self.show(&view)?;
                self.settle_ai().await
            }
            Err(reason) => {
                writeln!(self.out, "{reason}")?;
                Ok(())
            }
        }
    }

    async fn undo(&mut self) -> Result<()> {
        match self.engine.undo_turn() {
            Ok(view) => {
                self.show(&view)?;
                // Undoing the computer's opening leaves it on turn.
                if self.engine.state().is_ai_turn() {
                    let view = self.engine.request_ai_move()?;
                    self.show(&view)?;
                    self.settle_ai().await?;
                }
                Ok(())
            }
            Err(reason) => {
                writeln!(self.out, "{reason}")?;
                Ok(())
            }
        }
    }

    /// Waits out the AI delay and plays its pending reply, if any.
    async fn settle_ai(&mut self) -> Result<()> {
        if !self.engine.state().ai_pending() {
            return Ok(());
        }
        sleep(self.ai_delay).await;
        match self.engine.resolve_ai_move() {
            Ok(view) => self.show(&view),
            Err(e) => {
                warn!(error = %e, "No AI move to resolve");
                Ok(())
            }
        }
    }

    fn show(&mut self, view: &GameView) -> Result<()> {
        writeln!(self.out, "\n{}\n{}", render::board(view), render::status(view))?;
        if let Some(announcement) = announce::announce(*view.mode(), view.result(), &mut self.announce_rng) {
            info!(%announcement, "Game over");
            writeln!(self.out, "{announcement}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu() {
        assert_eq!(Command::parse("1", true), Some(Command::Start(GameMode::TwoPlayer)));
        assert_eq!(Command::parse(" 2 ", true), Some(Command::Start(GameMode::VsAi)));
        assert_eq!(Command::parse("5", true), None);
        assert_eq!(Command::parse("q", true), Some(Command::Quit));
    }

    #[test]
    fn test_parse_game() {
        assert_eq!(Command::parse("1", false), Some(Command::Play(0)));
        assert_eq!(Command::parse("9", false), Some(Command::Play(8)));
        assert_eq!(Command::parse("Center", false), Some(Command::Play(4)));
        assert_eq!(Command::parse("U", false), Some(Command::Undo));
        assert_eq!(Command::parse("m", false), Some(Command::Menu));
        assert_eq!(Command::parse("0", false), None);
        assert_eq!(Command::parse("10", false), None);
    }
}
