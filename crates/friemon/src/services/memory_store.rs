//! In-memory interaction store
//!
//! Process-local cache of channel state, owned by whoever builds the bot and
//! shared with every event handler through an `Arc`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Character, ChannelState};
use crate::domain::value_objects::ChannelId;
use crate::ports::InteractionStore;

/// `InteractionStore` backed by a map guarded by a single lock
#[derive(Debug, Clone, Default)]
pub struct InMemoryInteractionStore {
    channels: Arc<RwLock<HashMap<ChannelId, ChannelState>>>,
}

impl InMemoryInteractionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a channel's state
    pub async fn snapshot(&self, channel_id: ChannelId) -> Option<ChannelState> {
        self.channels.read().await.get(&channel_id).cloned()
    }

    /// Number of channels with recorded state
    pub async fn channel_count(&self) -> usize {
        self.channels.read().await.len()
    }
}

#[async_trait]
impl InteractionStore for InMemoryInteractionStore {
    async fn count(&self, channel_id: ChannelId) -> u32 {
        self.channels
            .read()
            .await
            .get(&channel_id)
            .map(|state| state.interaction_count)
            .unwrap_or(0)
    }

    async fn increment(&self, channel_id: ChannelId) -> u32 {
        let mut channels = self.channels.write().await;
        let state = channels.entry(channel_id).or_default();
        state.interaction_count = state.interaction_count.saturating_add(1);
        state.interaction_count
    }

    async fn reset(&self, channel_id: ChannelId) {
        if let Some(state) = self.channels.write().await.get_mut(&channel_id) {
            state.interaction_count = 0;
        }
    }

    async fn set_channel_character(&self, channel_id: ChannelId, character: Character) {
        self.channels
            .write()
            .await
            .entry(channel_id)
            .or_default()
            .set_character(character);
    }

    async fn channel_character(&self, channel_id: ChannelId) -> Option<Character> {
        self.channels
            .read()
            .await
            .get(&channel_id)
            .and_then(|state| state.character.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Personality, Stats};

    const CHANNEL: ChannelId = ChannelId(42);

    #[tokio::test]
    async fn test_unseen_channel_counts_zero() {
        let store = InMemoryInteractionStore::new();
        assert_eq!(store.count(ChannelId(7)).await, 0);
        assert!(store.channel_character(ChannelId(7)).await.is_none());
        assert_eq!(store.channel_count().await, 0);
    }

    #[tokio::test]
    async fn test_increments_accumulate() {
        let store = InMemoryInteractionStore::new();
        for expected in 1..=9 {
            assert_eq!(store.increment(CHANNEL).await, expected);
        }
        assert_eq!(store.count(CHANNEL).await, 9);
        assert_eq!(store.count(ChannelId(43)).await, 0);
    }

    #[tokio::test]
    async fn test_reset_is_idempotent() {
        let store = InMemoryInteractionStore::new();
        store.reset(CHANNEL).await;
        assert_eq!(store.count(CHANNEL).await, 0);

        store.increment(CHANNEL).await;
        store.increment(CHANNEL).await;
        store.reset(CHANNEL).await;
        store.reset(CHANNEL).await;
        assert_eq!(store.count(CHANNEL).await, 0);
    }

    #[tokio::test]
    async fn test_set_channel_character_keeps_counter() {
        let store = InMemoryInteractionStore::new();
        store.increment(CHANNEL).await;

        let stark = Character::new(13, "Stark", Personality::Rash, 8, Stats::new(125, 115, 85, 45, 60, 75));
        store.set_channel_character(CHANNEL, stark.clone()).await;

        assert_eq!(store.channel_character(CHANNEL).await, Some(stark));
        assert_eq!(store.count(CHANNEL).await, 1);

        let snapshot = store.snapshot(CHANNEL).await.unwrap();
        assert!(snapshot.spawned_at.is_some());
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let store = InMemoryInteractionStore::new();

        let tasks: Vec<_> = (0..64)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.increment(CHANNEL).await;
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.count(CHANNEL).await, 64);
    }
}
