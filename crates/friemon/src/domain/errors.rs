//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Render error: {0}")]
    Render(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn render<T: std::fmt::Display>(character: &str, cause: T) -> Self {
        Self::Render(format!("{}: {}", character, cause))
    }

    /// Whether the error leaves the spawn eligible for a retry on the next message
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Delivery(_))
    }
}
