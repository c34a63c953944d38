//! Friemon Domain Library
//!
//! Core types and the spawn engine for the Friemon collectible character bot.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure entities and logic
//!   - `entities/`: Character, ChannelState, spawn messages
//!   - `value_objects/`: Personality, Stats, platform ids
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `CharacterSource`, `SpawnPoster`, `InteractionStore`
//!
//! - **Services** (`services/`): Spawn engine, in-memory store, roster
//!
//! # Usage
//!
//! ```rust,ignore
//! use friemon::{InMemoryInteractionStore, ImageLibrary, Roster, SpawnEngine};
//!
//! let engine = SpawnEngine::new(
//!     Arc::new(InMemoryInteractionStore::new()),
//!     Arc::new(Roster::new(ImageLibrary::new("assets/characters"))),
//!     Arc::new(poster),
//!     None,
//! );
//! engine.handle_message(channel_id, guild_id).await;
//! ```

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{
    ActionButton, Attachment, ChannelId, ChannelState, Character, CharacterImage, DomainError,
    GuildId, Personality, PostedMessage, SpawnEmbed, SpawnMessage, Stat, StatMultipliers, Stats,
    CLAIM_CUSTOM_ID, COLOR_DEFAULT, SPAWN_IMAGE_FILE_NAME,
};
pub use ports::{CharacterSource, InteractionStore, SpawnPoster};
pub use services::{
    ImageLibrary, InMemoryInteractionStore, Roster, SpawnConfig, SpawnEngine, SpawnOutcome,
    DEFAULT_SPAWN_THRESHOLD,
};
