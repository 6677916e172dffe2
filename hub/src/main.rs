//! Guild Hub - Main Entry Point
//!
//! Evaluates an access hub snapshot and prints the planned hub as JSON.
//!
//! Usage: `guild-hub <snapshot.json>`

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use guild_hub::config::{self, LogFormat};
use guild_hub::snapshot::Snapshot;
use guild_hub::RewardRegistry;

fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    // Initialize tracing (stderr, stdout carries the result)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_filter.clone().into());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: guild-hub <snapshot.json>")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        snapshot = %path.display(),
        "Evaluating access hub"
    );

    let snapshot = Snapshot::from_path(&path)
        .with_context(|| format!("failed to load snapshot {}", path.display()))?;

    let registry = RewardRegistry::builtin();
    let placement = config.credential_placement(snapshot.guild.id);
    let view = snapshot.evaluate(&registry, placement);

    info!(
        guild_id = %snapshot.guild.id,
        visible = view.visible,
        items = view.items.len(),
        "Access hub planned"
    );

    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
