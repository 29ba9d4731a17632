//! Terminal front end for the classic tic-tac-toe engine.
//!
//! Reads one command per line, renders the board as text, and paces the
//! computer's replies with a configurable delay.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod announce;
pub mod cli;
pub mod config;
pub mod render;
pub mod session;

pub use announce::{Announcement, announce};
pub use cli::{Cli, StartMode};
pub use config::{ConfigError, Settings};
pub use session::{Command, Flow, Session};
