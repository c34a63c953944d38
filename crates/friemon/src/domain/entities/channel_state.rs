//! ChannelState - Per-channel spawn bookkeeping

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::character::Character;

/// Interaction state for one channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelState {
    /// Messages seen since the last spawn attempt reset
    pub interaction_count: u32,
    /// Most recently spawned, not yet claimed character
    pub character: Option<Character>,
    pub spawned_at: Option<DateTime<Utc>>,
}

impl ChannelState {
    pub fn set_character(&mut self, character: Character) {
        self.character = Some(character);
        self.spawned_at = Some(Utc::now());
    }
}
