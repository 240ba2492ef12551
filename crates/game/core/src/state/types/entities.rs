use super::{EntityId, Position};

/// The controllable character.
///
/// # Invariants
///
/// - `0 <= health <= GameConfig::max_health`
/// - `position` lies inside the map
/// - `inventory` holds each item id at most once, in pickup order
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Position,
    pub health: i32,
    pub inventory: Vec<EntityId>,
}

impl PlayerState {
    pub fn new(position: Position, health: i32) -> Self {
        Self {
            position,
            health,
            inventory: Vec::new(),
        }
    }

    pub fn has_item(&self, item: &EntityId) -> bool {
        self.inventory.contains(item)
    }
}

/// Enumerates the item categories. The category decides what `UseItem` does.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Restores health when used, then is consumed.
    Potion,
    /// Carried for doors; has no effect when used directly.
    Key,
    /// Any other named item. Carried, never consumed.
    Other(String),
}

impl ItemKind {
    /// Display name of the item, as written in save files.
    pub fn name(&self) -> &str {
        match self {
            ItemKind::Potion => "Potion",
            ItemKind::Key => "Key",
            ItemKind::Other(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "Potion" => ItemKind::Potion,
            "Key" => ItemKind::Key,
            other => ItemKind::Other(other.to_owned()),
        }
    }

    pub fn is_consumable(&self) -> bool {
        matches!(self, ItemKind::Potion)
    }
}

/// An item placed in the world. Picked items stay in the map with `picked = true`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: EntityId,
    pub kind: ItemKind,
    pub position: Position,
    /// One-way flag: once true it never reverts.
    pub picked: bool,
}

impl ItemState {
    pub fn new(id: impl Into<EntityId>, kind: ItemKind, position: Position) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            picked: false,
        }
    }

    pub fn name(&self) -> &str {
        self.kind.name()
    }
}

/// Enumerates the prop categories. Extend as needed by gameplay.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropKind {
    Door,
    Switch,
    /// Scenery without interactive state.
    Other(String),
}

impl PropKind {
    /// Lowercase type name, as written in save files.
    pub fn type_name(&self) -> &str {
        match self {
            PropKind::Door => "door",
            PropKind::Switch => "switch",
            PropKind::Other(name) => name,
        }
    }

    pub fn from_type_name(name: &str) -> Self {
        match name {
            "door" => PropKind::Door,
            "switch" => PropKind::Switch,
            other => PropKind::Other(other.to_owned()),
        }
    }

    /// Whether `Interact` can toggle this kind of prop.
    pub fn is_toggleable(&self) -> bool {
        matches!(self, PropKind::Door | PropKind::Switch)
    }

    /// Label for the given activation state (`open`/`closed`, `on`/`off`).
    pub fn state_label(&self, is_active: bool) -> &'static str {
        match (self, is_active) {
            (PropKind::Door, true) => "open",
            (PropKind::Door, false) => "closed",
            (PropKind::Switch, true) => "on",
            (PropKind::Switch, false) => "off",
            (PropKind::Other(_), true) => "active",
            (PropKind::Other(_), false) => "inactive",
        }
    }

    /// Parses a state label within this kind's domain.
    ///
    /// Returns `None` when the label belongs to another kind (a door cannot be `on`).
    pub fn parse_state_label(&self, label: &str) -> Option<bool> {
        [true, false]
            .into_iter()
            .find(|&is_active| self.state_label(is_active) == label)
    }
}

/// Interactive environment object such as a door or a switch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropState {
    pub id: EntityId,
    pub kind: PropKind,
    /// Door open / switch on.
    pub is_active: bool,
}

impl PropState {
    pub fn new(id: impl Into<EntityId>, kind: PropKind, is_active: bool) -> Self {
        Self {
            id: id.into(),
            kind,
            is_active,
        }
    }

    pub fn state_label(&self) -> &'static str {
        self.kind.state_label(self.is_active)
    }
}
