//! Discord configuration

use serde::{Deserialize, Serialize};

/// Configuration for Discord integration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token
    #[serde(default)]
    pub token: String,
    /// Guilds that receive slash commands directly (instant registration)
    #[serde(default)]
    pub dev_guilds: Vec<u64>,
    /// Whether bot-authored messages count as interactions
    #[serde(default)]
    pub count_bot_messages: bool,
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Add a development guild
    pub fn with_dev_guild(mut self, guild_id: u64) -> Self {
        self.dev_guilds.push(guild_id);
        self
    }

    /// Count messages from other bots
    pub fn with_bot_messages(mut self, enable: bool) -> Self {
        self.count_bot_messages = enable;
        self
    }

    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DiscordConfig::new("test-token")
            .with_dev_guild(12345)
            .with_dev_guild(67890)
            .with_bot_messages(true);

        assert_eq!(config.token, "test-token");
        assert_eq!(config.dev_guilds, vec![12345, 67890]);
        assert!(config.count_bot_messages);
        assert!(config.has_token());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: DiscordConfig = toml::from_str("token = \"abc\"").unwrap();
        assert_eq!(config.token, "abc");
        assert!(config.dev_guilds.is_empty());
        assert!(!config.count_bot_messages);

        assert!(!DiscordConfig::new("   ").has_token());
    }
}
