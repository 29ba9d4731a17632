//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, ValueEnum};
use classic_tictactoe::GameMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Classic tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend or a heuristic AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the menu and start in this mode
    #[arg(short, long, value_enum)]
    pub mode: Option<StartMode>,

    /// Seed for the random source (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay before the AI replies, in milliseconds
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,
}

/// Mode chosen from the command line or the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartMode {
    /// Two people share the keyboard.
    TwoPlayer,
    /// Play X against the computer.
    VsAi,
}

impl From<StartMode> for GameMode {
    fn from(mode: StartMode) -> Self {
        match mode {
            StartMode::TwoPlayer => GameMode::TwoPlayer,
            StartMode::VsAi => GameMode::VsAi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_flags() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            "game.toml",
            "--mode",
            "vs-ai",
            "--seed",
            "42",
            "--ai-delay-ms",
            "0",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.mode, Some(StartMode::VsAi));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.ai_delay_ms, Some(0));
    }

    #[test]
    fn test_flags_are_optional() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert!(cli.config.is_none());
        assert!(cli.mode.is_none());
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["tictactoe", "--mode", "solo"]).is_err());
    }

    #[test]
    fn test_start_mode_maps_to_game_mode() {
        assert_eq!(GameMode::from(StartMode::TwoPlayer), GameMode::TwoPlayer);
        assert_eq!(GameMode::from(StartMode::VsAi), GameMode::VsAi);
    }
}
