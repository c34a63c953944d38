//! Spawn - Messages announcing a wandering character
//!
//! Platform-neutral description of what gets posted; the messaging adapter
//! turns it into embeds, attachments and buttons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::character::{Character, CharacterImage};
use crate::domain::value_objects::ChannelId;

/// Default embed color
pub const COLOR_DEFAULT: u32 = 0x5C5FEA;

/// File name the image is attached under
pub const SPAWN_IMAGE_FILE_NAME: &str = "character.png";

/// Custom id of the claim button
pub const CLAIM_CUSTOM_ID: &str = "/claim";

/// Embed part of a spawn announcement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnEmbed {
    pub title: String,
    pub description: String,
    pub color: u32,
    /// `attachment://` reference to the image, once one is attached
    pub image_url: Option<String>,
}

impl SpawnEmbed {
    pub fn for_character(character: &Character) -> Self {
        Self {
            title: format!("A wandering {} appeared!", character.name),
            description: format!(
                "Click the button below to add {} to your characters!",
                character.name
            ),
            color: COLOR_DEFAULT,
            image_url: None,
        }
    }
}

/// Actionable button attached below the embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    pub label: String,
    pub custom_id: String,
}

impl ActionButton {
    pub fn claim() -> Self {
        Self {
            label: "Claim".to_string(),
            custom_id: CLAIM_CUSTOM_ID.to_string(),
        }
    }
}

/// File attached to the message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub image: CharacterImage,
}

/// A fully composed spawn announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnMessage {
    pub embed: SpawnEmbed,
    pub attachment: Attachment,
    pub button: ActionButton,
}

impl SpawnMessage {
    /// Attach the rendered image to the embed and add the claim button
    pub fn new(mut embed: SpawnEmbed, image: CharacterImage) -> Self {
        embed.image_url = Some(format!("attachment://{}", SPAWN_IMAGE_FILE_NAME));

        Self {
            embed,
            attachment: Attachment {
                file_name: SPAWN_IMAGE_FILE_NAME.to_string(),
                image,
            },
            button: ActionButton::claim(),
        }
    }
}

/// Handle of a message the platform accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedMessage {
    pub message_id: u64,
    pub channel_id: ChannelId,
    pub posted_at: DateTime<Utc>,
}

impl PostedMessage {
    pub fn new(message_id: u64, channel_id: ChannelId) -> Self {
        Self {
            message_id,
            channel_id,
            posted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Personality, Stats};

    #[test]
    fn test_spawn_message_references_attachment() {
        let fern = Character::new(4, "Fern", Personality::Merry, 12, Stats::new(70, 50, 55, 90, 70, 80));
        let embed = SpawnEmbed::for_character(&fern);
        assert_eq!(embed.title, "A wandering Fern appeared!");
        assert!(embed.description.contains("Fern"));
        assert!(embed.image_url.is_none());

        let message = SpawnMessage::new(embed, CharacterImage::png(vec![1, 2, 3]));
        assert_eq!(
            message.embed.image_url.as_deref(),
            Some("attachment://character.png")
        );
        assert_eq!(message.attachment.file_name, "character.png");
        assert_eq!(message.button.custom_id, "/claim");
        assert_eq!(message.button.label, "Claim");
    }
}
