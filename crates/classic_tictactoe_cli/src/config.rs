//! Front end settings loaded from TOML.

use crate::cli::{Cli, StartMode};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Pause before the AI plays its reply.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Mode to start in; `None` shows the menu.
    #[serde(default)]
    default_mode: Option<StartMode>,
}

fn default_ai_delay_ms() -> u64 {
    800
}

fn default_log_filter() -> String {
    "warn,classic_tictactoe=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_delay_ms: default_ai_delay_ms(),
            log_filter: default_log_filter(),
            default_mode: None,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(ai_delay_ms = settings.ai_delay_ms, "Settings loaded");
        Ok(settings)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(delay) = cli.ai_delay_ms {
            self.ai_delay_ms = delay;
        }
        if let Some(mode) = cli.mode {
            self.default_mode = Some(mode);
        }
        self
    }

    /// AI delay as a [`Duration`].
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ai_delay_ms(), &800);
        assert_eq!(settings.log_filter(), "warn,classic_tictactoe=info");
        assert_eq!(settings.default_mode(), &None);
    }

    #[test]
    fn test_from_file() {
        let file = write_config("ai_delay_ms = 250\ndefault_mode = \"vs-ai\"\n");
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.ai_delay(), Duration::from_millis(250));
        assert_eq!(settings.default_mode(), &Some(StartMode::VsAi));
        assert_eq!(settings.log_filter(), "warn,classic_tictactoe=info");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        assert_eq!(Settings::from_file(file.path()).unwrap(), Settings::default());
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_file("/nonexistent/tictactoe.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_config("ai_delay_ms = \"soon\"");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Config error: Failed to parse config"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = write_config("ai_delay_ms = 250\ndefault_mode = \"two-player\"\n");
        let cli = Cli::parse_from(["tictactoe", "--ai-delay-ms", "0", "--mode", "vs-ai"]);
        let settings = Settings::from_file(file.path()).unwrap().with_overrides(&cli);
        assert_eq!(settings.ai_delay_ms(), &0);
        assert_eq!(settings.default_mode(), &Some(StartMode::VsAi));
    }
}
