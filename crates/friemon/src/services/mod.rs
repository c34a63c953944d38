//! Services
//!
//! Concrete implementations that live inside the domain crate: the spawn
//! engine, the in-memory state store and the character roster.

pub mod images;
pub mod memory_store;
pub mod roster;
pub mod spawn_engine;

pub use images::ImageLibrary;
pub use memory_store::InMemoryInteractionStore;
pub use roster::{Roster, RosterEntry, ROSTER};
pub use spawn_engine::{SpawnConfig, SpawnEngine, SpawnOutcome, DEFAULT_SPAWN_THRESHOLD};
