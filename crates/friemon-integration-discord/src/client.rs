//! Discord API client wrapper

use friemon::SpawnMessage;
use serenity::builder::{
    CreateActionRow, CreateAttachment, CreateButton, CreateEmbed, CreateMessage,
};
use serenity::http::Http;
use serenity::model::application::ButtonStyle;
use serenity::model::channel::Message as SerenityMessage;
use serenity::model::id::ChannelId;
use std::sync::Arc;
use tracing::{debug, error};

use crate::config::DiscordConfig;

/// Discord API client
pub struct DiscordClient {
    http: Arc<Http>,
}

impl DiscordClient {
    /// Create a new Discord client
    pub fn new(config: &DiscordConfig) -> Self {
        Self::from_http(Arc::new(Http::new(&config.token)))
    }

    /// Wrap an existing HTTP client
    pub fn from_http(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Send a spawn announcement: embed, image attachment and claim button
    pub async fn send_spawn(
        &self,
        channel_id: u64,
        spawn: &SpawnMessage,
    ) -> Result<SerenityMessage, serenity::Error> {
        let channel = ChannelId::new(channel_id);
        debug!(
            channel_id = %channel_id,
            image_len = spawn.attachment.image.bytes.len(),
            "Sending spawn message to Discord"
        );

        let message = channel
            .send_message(&self.http, build_spawn_message(spawn))
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send Discord message"))?;

        Ok(message)
    }

    /// Get the underlying HTTP client for advanced operations
    pub fn http(&self) -> &Arc<Http> {
        &self.http
    }
}

/// Translate a spawn message into serenity builders
pub fn build_spawn_message(spawn: &SpawnMessage) -> CreateMessage {
    let mut embed = CreateEmbed::new()
        .title(&spawn.embed.title)
        .description(&spawn.embed.description)
        .colour(spawn.embed.color);

    if let Some(url) = &spawn.embed.image_url {
        embed = embed.image(url);
    }

    let button = CreateButton::new(&spawn.button.custom_id)
        .label(&spawn.button.label)
        .style(ButtonStyle::Primary);

    CreateMessage::new()
        .embed(embed)
        .add_file(CreateAttachment::bytes(
            spawn.attachment.image.bytes.clone(),
            &spawn.attachment.file_name,
        ))
        .components(vec![CreateActionRow::Buttons(vec![button])])
}
