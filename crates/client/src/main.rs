//! Demo driver binary.
//!
//! Runs a scripted session against the game rules: movement, pickup, item use,
//! door interaction, then a save/load round trip and a reset.
//!
//! Environment variables (all optional, also read from `.env`):
//! - `GAME_LOG_DIR` - also write logs to `<dir>/demo.log`
//! - `RUST_LOG` - log filter (default: `info`)
//! - `GAME_SAVE_PATH`, `GAME_MAP_WIDTH`, ... - see [`runtime::RuntimeConfig::from_env`]
mod demo;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use runtime::RuntimeConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let log_dir = std::env::var_os("GAME_LOG_DIR").map(PathBuf::from);
    let _guard = logging::setup_logging(log_dir.as_deref())?;

    let config = RuntimeConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    demo::run(config)
}
