//! Arena game client binary.
//!
//! Main entry point for the arena game.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Game tables via `game-content`
//! 2. The terminal console from `client-frontend-cli`
//! 3. The scene controller from `runtime`
//!
//! The game takes no flags or arguments and runs until the player quits.

use anyhow::{Context, Result};
use client_frontend_cli::{CliConfig, StdConsole, logging};
use game_content::ConfigLoader;
use runtime::SceneController;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&cli_config)?;

    tracing::info!("Starting arena client");

    // 3. Load game tables
    let game_config = ConfigLoader::builtin()?;
    tracing::debug!(
        enemies = game_config.enemies.len(),
        classes = game_config.classes.len(),
        items = game_config.items.len(),
        "game tables loaded"
    );

    // 4. Build console and controller
    let console = StdConsole::stdio(&cli_config);
    let mut controller =
        SceneController::new(game_config, console).context("failed to build scene controller")?;

    // 5. Run
    controller.run().context("game loop failed")?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
