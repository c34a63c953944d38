//! Gateway event handler
//!
//! Feeds guild messages into the spawn engine and answers slash commands.

use friemon::{ChannelId, GuildId, InteractionStore, SpawnEngine};
use serenity::async_trait;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::{Context, EventHandler};
use serenity::model::application::{CommandInteraction, Interaction};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::commands::{self, BuildInfo};
use crate::config::DiscordConfig;

/// serenity event handler driving the spawn engine
pub struct SpawnHandler {
    engine: Arc<SpawnEngine>,
    build: BuildInfo,
    count_bot_messages: bool,
}

impl SpawnHandler {
    pub fn new(engine: Arc<SpawnEngine>, config: &DiscordConfig, build: BuildInfo) -> Self {
        Self {
            engine,
            build,
            count_bot_messages: config.count_bot_messages,
        }
    }

    /// Whether a message counts towards the channel's spawn counter
    ///
    /// Direct messages never count; bot messages only when configured.
    pub fn counts_as_interaction(&self, is_bot: bool, guild_id: Option<u64>) -> bool {
        guild_id.is_some() && (self.count_bot_messages || !is_bot)
    }

    async fn respond(&self, ctx: &Context, command: &CommandInteraction) {
        let content = match command.data.name.as_str() {
            commands::VERSION_COMMAND => commands::version_reply(&self.build),
            commands::CHARACTER_COMMAND => {
                let character = self
                    .engine
                    .store()
                    .channel_character(ChannelId(command.channel_id.get()))
                    .await;
                commands::character_reply(character.as_ref())
            }
            other => {
                warn!(command = %other, "Unknown slash command");
                return;
            }
        };

        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(true),
        );

        if let Err(e) = command.create_response(&ctx.http, response).await {
            error!(command = %command.data.name, error = %e, "Failed to respond to command");
        }
    }
}

#[async_trait]
impl EventHandler for SpawnHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            "Connected to Discord gateway"
        );
    }

    async fn message(&self, _ctx: Context, msg: Message) {
        let guild_id = msg.guild_id.map(|g| g.get());
        if !self.counts_as_interaction(msg.author.bot, guild_id) {
            return;
        }

        let outcome = self
            .engine
            .handle_message(ChannelId(msg.channel_id.get()), guild_id.map(GuildId))
            .await;

        if outcome.attempted() {
            debug!(channel_id = %msg.channel_id, spawned = outcome.is_spawned(), "Spawn attempted");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            debug!(command = %command.data.name, user = %command.user.name, "Slash command");
            self.respond(&ctx, &command).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use friemon::{
        Character, CharacterImage, CharacterSource, DomainError, InMemoryInteractionStore,
        Personality, PostedMessage, SpawnMessage, SpawnPoster, Stats,
    };

    struct NoopSource;

    #[async_trait]
    impl CharacterSource for NoopSource {
        fn random_character(&self) -> Character {
            Character::new(1, "Aura", Personality::Stoic, 5, Stats::new(75, 60, 70, 130, 90, 85))
        }

        async fn render(&self, _character: &Character) -> Result<CharacterImage, DomainError> {
            Ok(CharacterImage::png(Vec::new()))
        }
    }

    struct NoopPoster;

    #[async_trait]
    impl SpawnPoster for NoopPoster {
        async fn post_spawn(
            &self,
            channel_id: ChannelId,
            _message: &SpawnMessage,
        ) -> Result<PostedMessage, DomainError> {
            Ok(PostedMessage::new(1, channel_id))
        }
    }

    fn handler(config: &DiscordConfig) -> SpawnHandler {
        let engine = SpawnEngine::new(
            Arc::new(InMemoryInteractionStore::new()),
            Arc::new(NoopSource),
            Arc::new(NoopPoster),
            None,
        );
        SpawnHandler::new(Arc::new(engine), config, BuildInfo::new("dev", "unknown"))
    }

    #[test]
    fn test_direct_messages_do_not_count() {
        let handler = handler(&DiscordConfig::new("token"));
        assert!(!handler.counts_as_interaction(false, None));
        assert!(handler.counts_as_interaction(false, Some(1)));
    }

    #[test]
    fn test_bot_messages_are_opt_in() {
        let default = handler(&DiscordConfig::new("token"));
        assert!(!default.counts_as_interaction(true, Some(1)));

        let counting = handler(&DiscordConfig::new("token").with_bot_messages(true));
        assert!(counting.counts_as_interaction(true, Some(1)));
        assert!(!counting.counts_as_interaction(true, None));
    }
}
