//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod ids;
mod personality;
mod stats;

pub use ids::*;
pub use personality::*;
pub use stats::*;
