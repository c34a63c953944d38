//! SpawnPoster implementation for Discord

use async_trait::async_trait;
use friemon::{ChannelId, DomainError, PostedMessage, SpawnMessage, SpawnPoster};
use tracing::debug;

use crate::client::DiscordClient;
use crate::config::DiscordConfig;

/// Discord integration implementing the SpawnPoster port
pub struct DiscordIntegration {
    client: DiscordClient,
}

impl DiscordIntegration {
    /// Create a new Discord integration
    pub fn new(config: &DiscordConfig) -> Self {
        Self {
            client: DiscordClient::new(config),
        }
    }

    pub fn client(&self) -> &DiscordClient {
        &self.client
    }
}

/// Map serenity failures into the domain taxonomy
pub(crate) fn delivery_error(e: serenity::Error) -> DomainError {
    match e {
        serenity::Error::Model(e) => DomainError::Validation(format!("Discord model error: {}", e)),
        e => DomainError::Delivery(format!("Discord API error: {}", e)),
    }
}

#[async_trait]
impl SpawnPoster for DiscordIntegration {
    async fn post_spawn(
        &self,
        channel_id: ChannelId,
        message: &SpawnMessage,
    ) -> Result<PostedMessage, DomainError> {
        debug!(
            channel_id = %channel_id,
            title = %message.embed.title,
            "Posting spawn to Discord"
        );

        let sent = self
            .client
            .send_spawn(channel_id.0, message)
            .await
            .map_err(delivery_error)?;

        Ok(PostedMessage::new(sent.id.get(), channel_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_errors_are_retryable() {
        let err = delivery_error(serenity::Error::Other("gateway closed"));
        assert!(matches!(err, DomainError::Delivery(_)));
        assert!(err.is_retryable());
    }
}
