//! Image library - Character artwork on disk
//!
//! Artwork is stored as `{stem}.png` inside the assets directory, with
//! `default.png` as the fallback for characters without their own file.

use std::path::{Path, PathBuf};

use crate::domain::entities::{Character, CharacterImage};
use crate::domain::errors::DomainError;

pub const DEFAULT_IMAGE: &str = "default.png";

/// Loads character artwork from a directory
#[derive(Debug, Clone)]
pub struct ImageLibrary {
    assets_dir: PathBuf,
}

impl ImageLibrary {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Path of the character's own artwork
    pub fn character_path(&self, character: &Character) -> PathBuf {
        self.assets_dir
            .join(format!("{}.png", character.image_stem()))
    }

    /// Load the character's artwork, falling back to the default image
    pub async fn load(&self, character: &Character) -> Result<CharacterImage, DomainError> {
        let own = self.character_path(character);

        match tokio::fs::read(&own).await {
            Ok(bytes) => return Ok(CharacterImage::png(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %own.display(), "No artwork for character, using default");
            }
            Err(e) => return Err(DomainError::render(&character.name, e)),
        }

        let fallback = self.assets_dir.join(DEFAULT_IMAGE);
        tokio::fs::read(&fallback)
            .await
            .map(CharacterImage::png)
            .map_err(|e| {
                DomainError::render(
                    &character.name,
                    format!("{} ({})", e, fallback.display()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Personality, Stats};

    fn character(name: &str) -> Character {
        Character::new(1, name, Personality::Aloof, 10, Stats::new(85, 50, 70, 120, 95, 80))
    }

    #[tokio::test]
    async fn test_loads_character_artwork() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("frieren.png"), b"frieren").unwrap();
        std::fs::write(dir.path().join(DEFAULT_IMAGE), b"default").unwrap();

        let library = ImageLibrary::new(dir.path());
        let image = library.load(&character("Frieren")).await.unwrap();
        assert_eq!(image.bytes, b"frieren");
        assert_eq!(image.content_type, "image/png");
    }

    #[tokio::test]
    async fn test_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_IMAGE), b"default").unwrap();

        let library = ImageLibrary::new(dir.path());
        let image = library.load(&character("Übel")).await.unwrap();
        assert_eq!(image.bytes, b"default");
    }

    #[tokio::test]
    async fn test_missing_artwork_is_render_error() {
        let dir = tempfile::tempdir().unwrap();

        let library = ImageLibrary::new(dir.path());
        let err = library.load(&character("Serie")).await.unwrap_err();
        assert!(matches!(err, DomainError::Render(_)));
        assert!(!err.is_retryable());
    }
}
