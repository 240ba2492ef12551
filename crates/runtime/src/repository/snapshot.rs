//! JSON save-file schema and conversion to and from [`GameState`].
//!
//! The on-disk layout is deliberately flat and human readable:
//!
//! ```text
//! { "width": 10, "height": 10,
//!   "player": { "x": 0, "y": 0, "health": 100, "inventory": ["p1"] },
//!   "items": { "p1": { "id": "p1", "name": "Potion", "x": 2, "y": 2, "picked": true } },
//!   "env_objects": { "d1": { "id": "d1", "type": "door", "state": "open" } } }
//! ```
//!
//! Prop states are written as labels (`open`/`closed`, `on`/`off`); a bare
//! boolean is also accepted on load.

use std::collections::BTreeMap;

use game_core::{
    EntityId, GameConfig, GameState, ItemKind, ItemState, PlayerState, Position, PropKind,
    PropState,
};
use serde::{Deserialize, Serialize};

use super::error::{RepositoryError, Result};

/// Top-level save-file record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    pub width: i32,
    pub height: i32,
    pub player: PlayerRecord,
    pub items: BTreeMap<String, ItemRecord>,
    pub env_objects: BTreeMap<String, PropRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub inventory: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub picked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub state: PropStateValue,
}

/// Prop state as written in the file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropStateValue {
    Label(String),
    Flag(bool),
}

impl SaveFile {
    pub fn from_state(state: &GameState) -> Self {
        let player = PlayerRecord {
            x: state.player.position.x,
            y: state.player.position.y,
            health: state.player.health,
            inventory: state
                .player
                .inventory
                .iter()
                .map(|id| id.to_string())
                .collect(),
        };

        let items = state
            .items
            .iter()
            .map(|(key, item)| {
                let record = ItemRecord {
                    id: item.id.to_string(),
                    name: item.name().to_owned(),
                    x: item.position.x,
                    y: item.position.y,
                    picked: item.picked,
                };
                (key.to_string(), record)
            })
            .collect();

        let env_objects = state
            .props
            .iter()
            .map(|(key, prop)| {
                let record = PropRecord {
                    id: prop.id.to_string(),
                    kind: prop.kind.type_name().to_owned(),
                    state: PropStateValue::Label(prop.state_label().to_owned()),
                };
                (key.to_string(), record)
            })
            .collect();

        Self {
            width: state.width,
            height: state.height,
            player,
            items,
            env_objects,
        }
    }

    /// Rebuilds the game state and checks its invariants against `config`.
    pub fn into_state(self, config: &GameConfig) -> Result<GameState> {
        let mut player = PlayerState::new(
            Position::new(self.player.x, self.player.y),
            self.player.health,
        );
        player.inventory = self.player.inventory.into_iter().map(EntityId).collect();

        let items: BTreeMap<EntityId, ItemState> = self
            .items
            .into_iter()
            .map(|(key, record)| {
                let item = ItemState {
                    id: EntityId(record.id),
                    kind: ItemKind::from_name(&record.name),
                    position: Position::new(record.x, record.y),
                    picked: record.picked,
                };
                (EntityId(key), item)
            })
            .collect();

        let props: BTreeMap<EntityId, PropState> = self
            .env_objects
            .into_iter()
            .map(|(key, record)| {
                let kind = PropKind::from_type_name(&record.kind);
                let is_active = match record.state {
                    PropStateValue::Flag(flag) => flag,
                    PropStateValue::Label(label) => {
                        kind.parse_state_label(&label).ok_or_else(|| {
                            RepositoryError::CorruptedData(format!(
                                "{} {key} has invalid state {label:?}",
                                kind.type_name()
                            ))
                        })?
                    }
                };
                Ok((EntityId(key), PropState::new(record.id, kind, is_active)))
            })
            .collect::<Result<_>>()?;

        let state = GameState {
            width: self.width,
            height: self.height,
            player,
            items,
            props,
        };

        state
            .validate(config)
            .map_err(|error| RepositoryError::CorruptedData(error.to_string()))?;

        Ok(state)
    }
}

/// Serializes the state as pretty-printed JSON.
pub fn encode_state(state: &GameState) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SaveFile::from_state(state))?)
}

/// Location reported by [`decode_state`] failures.
pub const STRING_SOURCE: &str = "<string>";

/// Parses and validates a JSON save held in memory.
///
/// Every failure is reported as [`RepositoryError::LoadFailed`].
pub fn decode_state(contents: &str, config: &GameConfig) -> Result<GameState> {
    parse_state(contents, config).map_err(|e| RepositoryError::load_failed(STRING_SOURCE, e))
}

/// Parses and validates a JSON save, keeping the detailed error.
pub(crate) fn parse_state(contents: &str, config: &GameConfig) -> Result<GameState> {
    let file: SaveFile = serde_json::from_str(contents)?;
    file.into_state(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn encodes_labels_and_names() {
        let mut state = GameState::initial(&config());
        state.props.get_mut(&EntityId::from("d1")).unwrap().is_active = true;

        let file = SaveFile::from_state(&state);

        assert_eq!(file.items["p1"].name, "Potion");
        assert_eq!(file.items["k1"].name, "Key");
        assert_eq!(file.env_objects["d1"].kind, "door");
        assert_eq!(
            file.env_objects["d1"].state,
            PropStateValue::Label("open".to_owned())
        );
        assert_eq!(
            file.env_objects["s1"].state,
            PropStateValue::Label("off".to_owned())
        );
    }

    #[test]
    fn accepts_boolean_prop_state() {
        let json = r#"{
            "width": 4, "height": 4,
            "player": { "x": 1, "y": 1, "health": 80, "inventory": [] },
            "items": {},
            "env_objects": { "s1": { "id": "s1", "type": "switch", "state": true } }
        }"#;

        let state = parse_state(json, &config()).unwrap();

        assert!(state.prop(&"s1".into()).unwrap().is_active);
        assert_eq!(state.player.health, 80);
    }

    #[test]
    fn rejects_state_outside_kind_domain() {
        let json = r#"{
            "width": 4, "height": 4,
            "player": { "x": 0, "y": 0, "health": 100, "inventory": [] },
            "items": {},
            "env_objects": { "d1": { "id": "d1", "type": "door", "state": "on" } }
        }"#;

        let err = parse_state(json, &config()).unwrap_err();

        assert!(matches!(err, RepositoryError::CorruptedData(_)));
    }

    #[test]
    fn rejects_missing_fields() {
        let json = r#"{ "width": 10, "height": 10 }"#;

        let err = parse_state(json, &config()).unwrap_err();

        assert!(matches!(err, RepositoryError::Json(_)));
    }

    #[test]
    fn rejects_player_outside_map() {
        let json = r#"{
            "width": 2, "height": 2,
            "player": { "x": 2, "y": 0, "health": 100, "inventory": [] },
            "items": {},
            "env_objects": {}
        }"#;

        assert!(matches!(
            parse_state(json, &config()),
            Err(RepositoryError::CorruptedData(_))
        ));
    }

    #[test]
    fn unknown_item_names_survive() {
        let mut state = GameState::empty(&config());
        state.insert_item(ItemState::new(
            "l1",
            ItemKind::Other("Lantern".to_owned()),
            Position::new(3, 4),
        ));

        let decoded = decode_state(&encode_state(&state).unwrap(), &config()).unwrap();

        assert_eq!(decoded, state);
    }

    #[test]
    fn decode_reports_every_failure_as_load_failed() {
        let truncated = decode_state("{", &config()).unwrap_err();
        let wrong_label = decode_state(
            r#"{
                "width": 4, "height": 4,
                "player": { "x": 0, "y": 0, "health": 100, "inventory": [] },
                "items": {},
                "env_objects": { "d1": { "id": "d1", "type": "door", "state": "on" } }
            }"#,
            &config(),
        )
        .unwrap_err();

        for err in [truncated, wrong_label] {
            assert!(err.is_load_failure());
            assert!(matches!(
                err,
                RepositoryError::LoadFailed { ref location, .. } if location == STRING_SOURCE
            ));
        }
    }
}
