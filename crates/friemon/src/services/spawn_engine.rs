//! Spawn Engine - Decides when a wandering character appears
//!
//! Every observed message bumps the channel's interaction counter. Once the
//! counter exceeds the threshold the engine draws a character, renders it and
//! posts it through the messaging port.
//!
//! - Render failure: counter reset, nothing posted.
//! - Post failure: state untouched, so the next message tries again.
//! - Success: the character becomes the channel's unclaimed character and the
//!   counter is reset.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{Character, PostedMessage, SpawnEmbed, SpawnMessage};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{ChannelId, GuildId};
use crate::ports::{CharacterSource, InteractionStore, SpawnPoster};

pub const DEFAULT_SPAWN_THRESHOLD: u32 = 4;

/// Spawn engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// A spawn is attempted once the counter strictly exceeds this value
    pub threshold: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SPAWN_THRESHOLD,
        }
    }
}

/// What happened to a single observed message
#[derive(Debug)]
pub enum SpawnOutcome {
    /// Counter still at or below the threshold
    Idle { count: u32 },
    /// Character posted and recorded for the channel
    Spawned {
        character: Character,
        message: PostedMessage,
    },
    /// Image could not be rendered; counter was reset
    RenderFailed {
        character: Character,
        error: DomainError,
    },
    /// Post was rejected; counter left above the threshold
    PostFailed {
        character: Character,
        error: DomainError,
    },
}

impl SpawnOutcome {
    pub fn is_spawned(&self) -> bool {
        matches!(self, Self::Spawned { .. })
    }

    pub fn attempted(&self) -> bool {
        !matches!(self, Self::Idle { .. })
    }
}

/// Per-channel spawn decision engine
pub struct SpawnEngine {
    store: Arc<dyn InteractionStore>,
    characters: Arc<dyn CharacterSource>,
    poster: Arc<dyn SpawnPoster>,
    config: SpawnConfig,
    channel_locks: Mutex<HashMap<ChannelId, Arc<Mutex<()>>>>,
}

impl SpawnEngine {
    pub fn new(
        store: Arc<dyn InteractionStore>,
        characters: Arc<dyn CharacterSource>,
        poster: Arc<dyn SpawnPoster>,
        config: Option<SpawnConfig>,
    ) -> Self {
        Self {
            store,
            characters,
            poster,
            config: config.unwrap_or_default(),
            channel_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn InteractionStore> {
        &self.store
    }

    /// Whether a counter value is eligible for a spawn
    pub fn should_spawn(&self, count: u32) -> bool {
        count > self.config.threshold
    }

    /// Observe one message in a channel and spawn if the threshold is crossed
    ///
    /// The whole check-then-act sequence runs under a per-channel lock, so two
    /// messages racing in the same channel cannot both spawn. Other channels
    /// are not blocked.
    pub async fn handle_message(
        &self,
        channel_id: ChannelId,
        guild_id: Option<GuildId>,
    ) -> SpawnOutcome {
        let lock = self.channel_lock(channel_id).await;
        let _guard = lock.lock().await;

        let count = self.store.increment(channel_id).await;
        tracing::debug!(channel_id = %channel_id, count, "Interaction count");

        if !self.should_spawn(count) {
            return SpawnOutcome::Idle { count };
        }

        self.spawn(channel_id, guild_id).await
    }

    async fn spawn(&self, channel_id: ChannelId, guild_id: Option<GuildId>) -> SpawnOutcome {
        let character = self.characters.random_character();
        let embed = SpawnEmbed::for_character(&character);

        let image = match self.characters.render(&character).await {
            Ok(image) => image,
            Err(error) => {
                tracing::error!(
                    channel_id = %channel_id,
                    character_id = character.id,
                    error = %error,
                    "Failed to get character image"
                );
                self.store.reset(channel_id).await;
                return SpawnOutcome::RenderFailed { character, error };
            }
        };

        let message = SpawnMessage::new(embed, image);

        let posted = match self.poster.post_spawn(channel_id, &message).await {
            Ok(posted) => posted,
            Err(error) => {
                tracing::error!(
                    channel_id = %channel_id,
                    guild_id = ?guild_id,
                    character_id = character.id,
                    retryable = error.is_retryable(),
                    error = %error,
                    "Failed to send spawn message"
                );
                return SpawnOutcome::PostFailed { character, error };
            }
        };

        self.store
            .set_channel_character(channel_id, character.clone())
            .await;
        self.store.reset(channel_id).await;

        tracing::info!(
            channel_id = %channel_id,
            character_id = character.id,
            character = %character.name,
            personality = %character.personality,
            message_id = posted.message_id,
            "Character spawned"
        );

        SpawnOutcome::Spawned {
            character,
            message: posted,
        }
    }

    async fn channel_lock(&self, channel_id: ChannelId) -> Arc<Mutex<()>> {
        self.channel_locks
            .lock()
            .await
            .entry(channel_id)
            .or_default()
            .clone()
    }
}
