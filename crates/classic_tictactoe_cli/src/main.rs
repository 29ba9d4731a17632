//! Classic tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use classic_tictactoe::{AiPacing, GameEngine, GameMode};
use classic_tictactoe_cli::{Cli, Session, Settings};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Loading settings from {}", path.display()))?,
        None => Settings::default(),
    }
    .with_overrides(&cli);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(seed = ?cli.seed, ai_delay_ms = settings.ai_delay_ms(), "Starting tic-tac-toe");

    let (engine, announce_rng) = match cli.seed {
        Some(seed) => (GameEngine::with_seed(seed), StdRng::seed_from_u64(seed.wrapping_add(1))),
        None => (GameEngine::new(), StdRng::from_entropy()),
    };
    let engine = engine.with_pacing(AiPacing::Deferred);

    let mut session = Session::new(engine, settings.ai_delay(), announce_rng, std::io::stdout());
    let start = settings.default_mode().map(GameMode::from);
    session.run(BufReader::new(tokio::io::stdin()), start).await
}
