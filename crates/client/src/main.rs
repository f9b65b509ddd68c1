//! `battle` binary.
//!
//! Loads `.env`, installs file logging, then runs one auto-piloted encounter
//! and prints the combat log followed by the result.

use anyhow::Result;
use battle_client::{ClientConfig, Session, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!(
        class = %config.class,
        monster = %config.monster,
        seed = config.seed,
        clock = %config.clock,
        "starting battle"
    );

    let summary = Session::open(config).await?.run().await?;
    let player = &summary.view.snapshot.player;
    println!("{}", battle_client::verdict(&summary));
    println!(
        "{} HP {}/{} | potions {} | max hit {}",
        player.name, player.hp, summary.view.player_stats.max_hp, player.potions, player.max_damage
    );

    tracing::info!(phase = %summary.phase, ticks = summary.ticks, "battle finished");
    Ok(())
}
