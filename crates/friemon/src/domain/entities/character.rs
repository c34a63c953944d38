//! Character - A spawnable, claimable creature
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Personality, Stats};

/// A character instance drawn from the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Roster identifier (1-based)
    pub id: u32,
    pub name: String,
    pub personality: Personality,
    pub level: u32,
    pub base_stats: Stats,
}

impl Character {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        personality: Personality,
        level: u32,
        base_stats: Stats,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            personality,
            level,
            base_stats,
        }
    }

    /// Base stats scaled by the personality multipliers
    pub fn effective_stats(&self) -> Stats {
        self.base_stats.scaled(&self.personality.multipliers())
    }

    /// File stem used for the character's artwork
    ///
    /// Lowercase, whitespace becomes `_`, umlauts are folded and anything
    /// outside `[a-z0-9_]` is dropped.
    pub fn image_stem(&self) -> String {
        self.name
            .trim()
            .to_lowercase()
            .chars()
            .filter_map(|c| match c {
                'ä' => Some('a'),
                'ö' => Some('o'),
                'ü' => Some('u'),
                'ß' => Some('s'),
                c if c.is_whitespace() => Some('_'),
                c if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' => Some(c),
                _ => None,
            })
            .collect()
    }
}

/// Rendered artwork for a character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

impl CharacterImage {
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: "image/png",
        }
    }
}
