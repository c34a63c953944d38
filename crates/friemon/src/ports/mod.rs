//! Ports - Abstract interfaces
//!
//! The spawn engine only talks to these traits; adapters for the chat
//! platform and the state store implement them.

pub mod character_source;
pub mod interaction_store;
pub mod messaging;

pub use character_source::*;
pub use interaction_store::*;
pub use messaging::*;
