//! Pickup and use of items.

use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, GameState, ItemKind, Position};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickupError {
    #[error("item {0} does not exist")]
    UnknownItem(EntityId),

    #[error("item {0} was already picked up")]
    AlreadyPicked(EntityId),

    #[error("player at {player} is not at item {item} location {location}")]
    NotAtLocation {
        item: EntityId,
        player: Position,
        location: Position,
    },

    #[error("item {0} missing from inventory after pickup")]
    InventoryDesync(EntityId),
}

impl GameError for PickupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            PickupError::UnknownItem(_) | PickupError::AlreadyPicked(_) => {
                ErrorSeverity::Validation
            }
            PickupError::NotAtLocation { .. } => ErrorSeverity::Recoverable,
            PickupError::InventoryDesync(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            PickupError::UnknownItem(_) => "PICKUP_UNKNOWN_ITEM",
            PickupError::AlreadyPicked(_) => "PICKUP_ALREADY_PICKED",
            PickupError::NotAtLocation { .. } => "PICKUP_NOT_AT_LOCATION",
            PickupError::InventoryDesync(_) => "PICKUP_INVENTORY_DESYNC",
        }
    }
}

/// Picks up the item lying on the player's tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupAction {
    pub item: EntityId,
}

impl PickupAction {
    pub fn new(item: impl Into<EntityId>) -> Self {
        Self { item: item.into() }
    }
}

impl ActionTransition for PickupAction {
    type Error = PickupError;
    type Result = EntityId;

    /// Checks existence, then the picked flag, then the location.
    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        let item = state
            .item(&self.item)
            .ok_or_else(|| PickupError::UnknownItem(self.item.clone()))?;

        if item.picked {
            return Err(PickupError::AlreadyPicked(self.item.clone()));
        }

        if state.player.position != item.position {
            return Err(PickupError::NotAtLocation {
                item: self.item.clone(),
                player: state.player.position,
                location: item.position,
            });
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Self::Result, Self::Error> {
        let item = state
            .items
            .get_mut(&self.item)
            .ok_or_else(|| PickupError::UnknownItem(self.item.clone()))?;

        item.picked = true;
        state.player.inventory.push(self.item.clone());

        Ok(self.item.clone())
    }

    fn post_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        let held = state
            .player
            .inventory
            .iter()
            .filter(|id| **id == self.item)
            .count();

        if held == 1 {
            Ok(())
        } else {
            Err(PickupError::InventoryDesync(self.item.clone()))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseItemError {
    #[error("item {0} is not in the inventory")]
    NotInInventory(EntityId),

    /// The inventory references an id that the world does not know about.
    #[error("inventory item {0} not found in game state")]
    UnknownItem(EntityId),

    #[error("player health {health} exceeds maximum {max}")]
    HealthAboveMaximum { health: i32, max: i32 },
}

impl GameError for UseItemError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            UseItemError::NotInInventory(_) => ErrorSeverity::Recoverable,
            UseItemError::UnknownItem(_) | UseItemError::HealthAboveMaximum { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            UseItemError::NotInInventory(_) => "USE_ITEM_NOT_IN_INVENTORY",
            UseItemError::UnknownItem(_) => "USE_ITEM_UNKNOWN_ITEM",
            UseItemError::HealthAboveMaximum { .. } => "USE_ITEM_HEALTH_ABOVE_MAXIMUM",
        }
    }
}

/// What using an item did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseOutcome {
    /// A potion was drunk and removed from the inventory.
    Healed { restored: i32, health: i32 },
    /// The item has no direct use. It stays in the inventory and nothing changed.
    NoEffect,
}

/// Uses an item from the player's inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub item: EntityId,
}

impl UseItemAction {
    pub fn new(item: impl Into<EntityId>) -> Self {
        Self { item: item.into() }
    }
}

impl ActionTransition for UseItemAction {
    type Error = UseItemError;
    type Result = UseOutcome;

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        if !state.player.has_item(&self.item) {
            return Err(UseItemError::NotInInventory(self.item.clone()));
        }

        if state.item(&self.item).is_none() {
            return Err(UseItemError::UnknownItem(self.item.clone()));
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<Self::Result, Self::Error> {
        let kind = state
            .item(&self.item)
            .map(|item| item.kind.clone())
            .ok_or_else(|| UseItemError::UnknownItem(self.item.clone()))?;

        match kind {
            ItemKind::Potion => {
                let player = &mut state.player;
                let headroom = (config.max_health - player.health).max(0);
                let restored = config.potion_potency.clamp(0, headroom);
                player.health += restored;
                player.inventory.retain(|id| *id != self.item);

                Ok(UseOutcome::Healed {
                    restored,
                    health: player.health,
                })
            }
            ItemKind::Key | ItemKind::Other(_) => Ok(UseOutcome::NoEffect),
        }
    }

    fn post_validate(&self, state: &GameState, config: &GameConfig) -> Result<(), Self::Error> {
        let health = state.player.health;
        if health > config.max_health {
            return Err(UseItemError::HealthAboveMaximum {
                health,
                max: config.max_health,
            });
        }
        Ok(())
    }
}
