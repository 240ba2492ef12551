//! State management errors.
//!
//! Errors raised when a [`GameState`](super::GameState) violates one of its
//! structural invariants. The engine checks these after every mutation and the
//! persistence layer checks them on load.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Invariant violations detected by [`GameState::validate`](super::GameState::validate).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Map dimensions must be positive.
    #[error("invalid map dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// Position is outside the map bounds.
    #[error("{entity} position {position} is out of bounds (map size: {width}x{height})")]
    PositionOutOfBounds {
        /// `player` or the item id.
        entity: String,
        position: Position,
        width: i32,
        height: i32,
    },

    /// Player health is outside `0..=max`.
    #[error("player health {health} is outside 0..={max}")]
    HealthOutOfRange { health: i32, max: i32 },

    /// A map entry is stored under a key that differs from the entity's own id.
    #[error("entry keyed {key} holds entity {id}")]
    KeyMismatch { key: EntityId, id: EntityId },

    /// Inventory refers to an item that does not exist in the world.
    #[error("inventory refers to unknown item {0}")]
    InventoryItemMissing(EntityId),

    /// Inventory holds an item whose `picked` flag is still false.
    #[error("inventory holds item {0} which was never picked")]
    InventoryItemNotPicked(EntityId),

    /// Inventory lists the same item twice.
    #[error("inventory lists item {0} more than once")]
    DuplicateInventoryItem(EntityId),

    /// An `Other` kind uses a name reserved for a built-in kind.
    #[error("{id} uses reserved kind name {name}")]
    ReservedKindName { id: EntityId, name: String },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            InvalidDimensions { .. } => ErrorSeverity::Fatal,
            PositionOutOfBounds { .. } | HealthOutOfRange { .. } => ErrorSeverity::Internal,
            KeyMismatch { .. }
            | InventoryItemMissing(_)
            | InventoryItemNotPicked(_)
            | DuplicateInventoryItem(_)
            | ReservedKindName { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            InvalidDimensions { .. } => "STATE_INVALID_DIMENSIONS",
            PositionOutOfBounds { .. } => "STATE_POSITION_OUT_OF_BOUNDS",
            HealthOutOfRange { .. } => "STATE_HEALTH_OUT_OF_RANGE",
            KeyMismatch { .. } => "STATE_KEY_MISMATCH",
            InventoryItemMissing(_) => "STATE_INVENTORY_ITEM_MISSING",
            InventoryItemNotPicked(_) => "STATE_INVENTORY_ITEM_NOT_PICKED",
            DuplicateInventoryItem(_) => "STATE_DUPLICATE_INVENTORY_ITEM",
            ReservedKindName { .. } => "STATE_RESERVED_KIND_NAME",
        }
    }
}
