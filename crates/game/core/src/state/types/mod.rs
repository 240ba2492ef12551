pub mod common;
pub mod entities;

// Re-export common types
pub use common::{EntityId, Position};

// Re-export entity types
pub use entities::{ItemKind, ItemState, PlayerState, PropKind, PropState};
