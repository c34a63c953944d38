//! Discord Integration for Friemon
//!
//! This crate connects the Friemon spawn engine to Discord: it posts spawn
//! announcements, feeds guild messages into the engine and answers the
//! informational slash commands.
//!
//! # Usage
//!
//! ```rust,ignore
//! use friemon_integration_discord::{DiscordConfig, DiscordIntegration, SpawnHandler};
//!
//! let config = DiscordConfig::new("your-bot-token");
//! let poster = DiscordIntegration::new(&config);
//! let handler = SpawnHandler::new(engine, &config, build_info);
//! ```

mod client;
pub mod commands;
mod config;
mod handler;
mod integration;

pub use client::{build_spawn_message, DiscordClient};
pub use commands::BuildInfo;
pub use config::DiscordConfig;
pub use handler::SpawnHandler;
pub use integration::DiscordIntegration;
