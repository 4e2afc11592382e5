//! Shared wiring for the game binaries: logging, config loading and the
//! production session setup.

use std::io;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::GamesConfig;
use crate::error::Result;
use crate::input::StdinInput;
use crate::random::ThreadRandom;
use crate::session::{Game, SessionLoop, SessionReport};

/// Install the tracing subscriber for a game binary.
///
/// Logs go to stderr so they never interleave with game narration on stdout.
pub fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tidepool=debug,info")
    } else {
        EnvFilter::new("tidepool=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Load configuration from a file, falling back to defaults
pub fn load_config(path: Option<&Path>) -> Result<GamesConfig> {
    let config = match path {
        Some(path) => GamesConfig::from_file(path)?,
        None => GamesConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Run one game against real stdin, stdout and the thread-local RNG
pub async fn play(game: impl Game) -> Result<SessionReport> {
    let mut session = SessionLoop::new(game, ThreadRandom::new(), StdinInput::new(), io::stdout());
    session.run().await
}
