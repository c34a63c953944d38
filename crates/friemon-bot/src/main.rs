//! Friemon - Collectible character spawns for Discord
//!
//! Counts messages per channel and, once a channel is busy enough, posts a
//! wandering character that users can claim.

mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use friemon::{ImageLibrary, InMemoryInteractionStore, Roster, SpawnEngine};
use friemon_integration_discord::{commands, BuildInfo, DiscordIntegration, SpawnHandler};
use serenity::all::{Client, GatewayIntents, ShardManager};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use config::Config;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

fn commit() -> &'static str {
    option_env!("FRIEMON_COMMIT").unwrap_or("unknown")
}

#[derive(Parser)]
#[command(name = "friemon")]
#[command(about = "Friemon - collectible character spawns for Discord", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Register slash commands with Discord before connecting
    #[arg(long)]
    sync_commands: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read config: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config.log) {
        eprintln!("Failed to setup logger: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Bot stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    tracing::info!(version = VERSION, commit = commit(), "Starting friemon...");
    tracing::info!(sync = cli.sync_commands, "Syncing commands");

    let poster = Arc::new(DiscordIntegration::new(&config.bot));

    if cli.sync_commands {
        tracing::info!(guild_ids = ?config.bot.dev_guilds, "Syncing commands");
        if let Err(e) = commands::sync_commands(poster.client().http(), &config.bot.dev_guilds).await {
            tracing::error!(error = %e, "Failed to sync commands");
        }
    }

    let engine = Arc::new(SpawnEngine::new(
        Arc::new(InMemoryInteractionStore::new()),
        Arc::new(Roster::new(ImageLibrary::new(&config.spawn.assets_dir))),
        poster,
        Some(config.spawn.engine_config()),
    ));

    tracing::info!(
        threshold = engine.config().threshold,
        assets_dir = %config.spawn.assets_dir.display(),
        "Spawn engine ready"
    );

    let handler = SpawnHandler::new(engine, &config.bot, BuildInfo::new(VERSION, commit()));

    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;
    let mut client = Client::builder(&config.bot.token, intents)
        .event_handler(handler)
        .await
        .context("Failed to setup bot")?;

    tokio::spawn(shutdown_on_signal(client.shard_manager.clone()));

    tracing::info!("Bot is running. Press CTRL-C to exit.");
    client.start().await.context("Failed to open gateway")?;

    Ok(())
}

async fn shutdown_on_signal(shard_manager: Arc<ShardManager>) {
    wait_for_signal().await;
    tracing::info!("Shutting down bot...");

    if tokio::time::timeout(SHUTDOWN_TIMEOUT, shard_manager.shutdown_all())
        .await
        .is_err()
    {
        tracing::warn!(timeout = ?SHUTDOWN_TIMEOUT, "Shards did not shut down in time");
    }
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to listen for SIGTERM");
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
