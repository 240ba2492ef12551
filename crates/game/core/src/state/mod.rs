//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the player, world items,
//! and props, plus the initialization and validation helpers. Callers clone or
//! query this state but mutate it exclusively through the engine.
pub mod error;
pub mod types;

use std::collections::{BTreeMap, BTreeSet};

use crate::config::GameConfig;

pub use error::StateError;
pub use types::{EntityId, ItemKind, ItemState, PlayerState, Position, PropKind, PropState};

/// Canonical snapshot of the game world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Map width; valid x coordinates are `0..width`.
    pub width: i32,
    /// Map height; valid y coordinates are `0..height`.
    pub height: i32,
    pub player: PlayerState,
    /// World items keyed by id. Picked items remain here with `picked = true`.
    pub items: BTreeMap<EntityId, ItemState>,
    /// Environment objects keyed by id.
    pub props: BTreeMap<EntityId, PropState>,
}

impl GameState {
    /// Creates an empty map of the configured size with a full-health player at the origin.
    pub fn empty(config: &GameConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            player: PlayerState::new(Position::ORIGIN, config.max_health),
            items: BTreeMap::new(),
            props: BTreeMap::new(),
        }
    }

    /// Creates the starting world: a potion and a key on the floor, a closed
    /// door and a switch that is off.
    ///
    /// Reset rebuilds the state through this function, so a reset world is
    /// always identical to a fresh one.
    pub fn initial(config: &GameConfig) -> Self {
        let mut state = Self::empty(config);

        state.insert_item(ItemState::new("p1", ItemKind::Potion, Position::new(2, 2)));
        state.insert_item(ItemState::new("k1", ItemKind::Key, Position::new(5, 5)));

        state.insert_prop(PropState::new("d1", PropKind::Door, false));
        state.insert_prop(PropState::new("s1", PropKind::Switch, false));

        state
    }

    /// Places an item in the world, keyed by its own id.
    ///
    /// Returns the previous item stored under the same id, if any.
    pub fn insert_item(&mut self, item: ItemState) -> Option<ItemState> {
        self.items.insert(item.id.clone(), item)
    }

    /// Places a prop in the world, keyed by its own id.
    pub fn insert_prop(&mut self, prop: PropState) -> Option<PropState> {
        self.props.insert(prop.id.clone(), prop)
    }

    pub fn item(&self, id: &EntityId) -> Option<&ItemState> {
        self.items.get(id)
    }

    pub fn prop(&self, id: &EntityId) -> Option<&PropState> {
        self.props.get(id)
    }

    /// Returns true if `position` lies within `[0, width) x [0, height)`.
    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    /// Checks every structural invariant of the state.
    ///
    /// `Other` kinds may not reuse a built-in kind name, since saves store kinds by name.
    pub fn validate(&self, config: &GameConfig) -> Result<(), StateError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(StateError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        self.check_in_bounds("player", self.player.position)?;

        if !(0..=config.max_health).contains(&self.player.health) {
            return Err(StateError::HealthOutOfRange {
                health: self.player.health,
                max: config.max_health,
            });
        }

        for (key, item) in &self.items {
            if *key != item.id {
                return Err(StateError::KeyMismatch {
                    key: key.clone(),
                    id: item.id.clone(),
                });
            }
            self.check_in_bounds(item.id.as_str(), item.position)?;
            if ItemKind::from_name(item.name()) != item.kind {
                return Err(StateError::ReservedKindName {
                    id: item.id.clone(),
                    name: item.name().to_owned(),
                });
            }
        }

        for (key, prop) in &self.props {
            if *key != prop.id {
                return Err(StateError::KeyMismatch {
                    key: key.clone(),
                    id: prop.id.clone(),
                });
            }
            if PropKind::from_type_name(prop.kind.type_name()) != prop.kind {
                return Err(StateError::ReservedKindName {
                    id: prop.id.clone(),
                    name: prop.kind.type_name().to_owned(),
                });
            }
        }

        let mut seen = BTreeSet::new();
        for id in &self.player.inventory {
            if !seen.insert(id) {
                return Err(StateError::DuplicateInventoryItem(id.clone()));
            }
            let item = self
                .items
                .get(id)
                .ok_or_else(|| StateError::InventoryItemMissing(id.clone()))?;
            if !item.picked {
                return Err(StateError::InventoryItemNotPicked(id.clone()));
            }
        }

        Ok(())
    }

    fn check_in_bounds(&self, entity: &str, position: Position) -> Result<(), StateError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(StateError::PositionOutOfBounds {
                entity: entity.to_owned(),
                position,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_matches_starting_world() {
        let config = GameConfig::default();
        let state = GameState::initial(&config);

        assert_eq!((state.width, state.height), (10, 10));
        assert_eq!(state.player.position, Position::ORIGIN);
        assert_eq!(state.player.health, 100);
        assert!(state.player.inventory.is_empty());

        let potion = state.item(&"p1".into()).unwrap();
        assert_eq!(potion.kind, ItemKind::Potion);
        assert_eq!(potion.position, Position::new(2, 2));
        assert!(!potion.picked);

        assert_eq!(state.prop(&"d1".into()).unwrap().state_label(), "closed");
        assert_eq!(state.prop(&"s1".into()).unwrap().state_label(), "off");
        assert_eq!(state.validate(&config), Ok(()));
    }

    #[test]
    fn bounds_are_half_open() {
        let state = GameState::empty(&GameConfig::with_dimensions(3, 2));

        assert!(state.contains(Position::new(0, 0)));
        assert!(state.contains(Position::new(2, 1)));
        assert!(!state.contains(Position::new(3, 0)));
        assert!(!state.contains(Position::new(0, 2)));
        assert!(!state.contains(Position::new(-1, 0)));
    }

    #[test]
    fn validate_rejects_inventory_of_unpicked_item() {
        let config = GameConfig::default();
        let mut state = GameState::initial(&config);
        state.player.inventory.push("p1".into());

        assert_eq!(
            state.validate(&config),
            Err(StateError::InventoryItemNotPicked("p1".into()))
        );
    }

    #[test]
    fn validate_rejects_item_outside_map() {
        let config = GameConfig::default();
        let mut state = GameState::initial(&config);
        state.items.get_mut(&EntityId::from("k1")).unwrap().position = Position::new(10, 0);

        assert!(matches!(
            state.validate(&config),
            Err(StateError::PositionOutOfBounds { ref entity, .. }) if entity == "k1"
        ));
    }

    #[test]
    fn validate_rejects_health_above_ceiling() {
        let config = GameConfig::default();
        let mut state = GameState::initial(&config);
        state.player.health = 101;

        assert_eq!(
            state.validate(&config),
            Err(StateError::HealthOutOfRange {
                health: 101,
                max: 100
            })
        );
    }

    #[test]
    fn validate_rejects_other_kinds_named_like_builtins() {
        let config = GameConfig::default();

        let mut state = GameState::empty(&config);
        state.insert_item(ItemState::new(
            "fake",
            ItemKind::Other("Potion".to_owned()),
            Position::ORIGIN,
        ));
        assert_eq!(
            state.validate(&config),
            Err(StateError::ReservedKindName {
                id: "fake".into(),
                name: "Potion".to_owned()
            })
        );

        let mut state = GameState::empty(&config);
        state.insert_prop(PropState::new("x", PropKind::Other("door".to_owned()), false));
        assert_eq!(
            state.validate(&config),
            Err(StateError::ReservedKindName {
                id: "x".into(),
                name: "door".to_owned()
            })
        );

        let mut state = GameState::empty(&config);
        state.insert_item(ItemState::new(
            "l1",
            ItemKind::Other("Lantern".to_owned()),
            Position::ORIGIN,
        ));
        state.insert_prop(PropState::new("st", PropKind::Other("statue".to_owned()), false));
        assert_eq!(state.validate(&config), Ok(()));
    }
}
