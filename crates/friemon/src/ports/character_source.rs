//! Character Source Port
//!
//! Where spawnable characters and their artwork come from.

use async_trait::async_trait;

use crate::domain::entities::{Character, CharacterImage};
use crate::domain::errors::DomainError;

/// Supplies random characters and renders their images
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Draw one character uniformly at random from the full pool
    fn random_character(&self) -> Character;

    /// Render the character's artwork
    ///
    /// Returns `DomainError::Render` when no image can be produced.
    async fn render(&self, character: &Character) -> Result<CharacterImage, DomainError>;
}
