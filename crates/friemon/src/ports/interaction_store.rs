//! Interaction Store Port
//!
//! Shared per-channel state: the interaction counter and the channel's
//! current unclaimed character.

use async_trait::async_trait;

use crate::domain::entities::Character;
use crate::domain::value_objects::ChannelId;

/// Store for per-channel interaction state
///
/// Every operation is atomic with respect to the others on the same channel.
#[async_trait]
pub trait InteractionStore: Send + Sync {
    /// Messages seen since the last reset (0 for unseen channels)
    async fn count(&self, channel_id: ChannelId) -> u32;

    /// Increment the counter and return the new value
    async fn increment(&self, channel_id: ChannelId) -> u32;

    /// Set the counter back to 0
    async fn reset(&self, channel_id: ChannelId);

    /// Record the channel's current unclaimed character
    async fn set_channel_character(&self, channel_id: ChannelId, character: Character);

    /// The channel's current unclaimed character, if any
    async fn channel_character(&self, channel_id: ChannelId) -> Option<Character>;
}
