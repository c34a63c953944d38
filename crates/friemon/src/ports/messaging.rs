//! Messaging Port
//!
//! Abstract interface for delivering spawn announcements to a chat platform.
//!
//! Implementations live in integration crates
//! (e.g., friemon-integration-discord).

use async_trait::async_trait;

use crate::domain::entities::{PostedMessage, SpawnMessage};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::ChannelId;

/// Posts composed spawn messages
#[async_trait]
pub trait SpawnPoster: Send + Sync {
    /// Post the embed, image attachment and claim button to a channel
    async fn post_spawn(
        &self,
        channel_id: ChannelId,
        message: &SpawnMessage,
    ) -> Result<PostedMessage, DomainError>;
}
