//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Character: a spawnable creature with personality and stats
//! - ChannelState: per-channel counter and unclaimed character
//! - Spawn: platform-neutral spawn announcement

mod channel_state;
mod character;
mod spawn;

pub use channel_state::*;
pub use character::*;
pub use spawn::*;
