//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! drives every action through its transition phases, re-checks the state
//! invariants afterwards, and surfaces rich error information to the caller.
//! A failed action never leaves a partial mutation behind.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionResult};
use crate::config::GameConfig;
use crate::state::GameState;

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Action-specific execution result (destination, item effect, prop state).
    pub result: ActionResult,

    /// Whether the state differs from before the action.
    ///
    /// False for zero-length moves and items used without effect.
    pub changed: bool,
}

/// Game engine that applies actions to a borrowed state.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
///
/// followed by a full [`GameState::validate`] pass. If any step fails the
/// state is restored to its pre-action snapshot before the error is returned.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given state and rules.
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes an action by routing it through the appropriate transition pipeline.
    pub fn execute(&mut self, action: &Action) -> Result<ExecutionOutcome, ExecuteError> {
        let before = self.state.clone();

        match self.try_execute(action) {
            Ok(result) => Ok(ExecutionOutcome {
                changed: *self.state != before,
                result,
            }),
            Err(error) => {
                *self.state = before;
                Err(error)
            }
        }
    }

    fn try_execute(&mut self, action: &Action) -> Result<ActionResult, ExecuteError> {
        let result = transition::execute_transition(action, self.state, self.config)?;

        self.state
            .validate(self.config)
            .map_err(|error| ExecuteError::InvariantViolated {
                action: action.as_snake_case().to_owned(),
                error,
            })?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::UseOutcome;
    use crate::error::GameError;
    use crate::state::{EntityId, ItemKind, ItemState, Position};

    fn execute(
        state: &mut GameState,
        config: &GameConfig,
        action: Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        GameEngine::new(state, config).execute(&action)
    }

    /// Player at the origin with full health and a potion one tile east.
    fn potion_scenario() -> (GameState, GameConfig) {
        let config = GameConfig::default();
        let mut state = GameState::empty(&config);
        state.insert_item(ItemState::new("potion1", ItemKind::Potion, Position::new(1, 0)));
        (state, config)
    }

    #[test]
    fn potion_walkthrough() {
        let (mut state, config) = potion_scenario();

        let moved = execute(&mut state, &config, Action::move_by(1, 0)).unwrap();
        assert_eq!(
            moved.result,
            ActionResult::Moved {
                from: Position::ORIGIN,
                to: Position::new(1, 0)
            }
        );

        execute(&mut state, &config, Action::pickup("potion1")).unwrap();
        assert_eq!(state.player.inventory, vec![EntityId::from("potion1")]);
        assert!(state.item(&"potion1".into()).unwrap().picked);

        let used = execute(&mut state, &config, Action::use_item("potion1")).unwrap();
        assert_eq!(
            used.result,
            ActionResult::Used {
                item: "potion1".into(),
                outcome: UseOutcome::Healed {
                    restored: 0,
                    health: 100
                }
            }
        );
        assert_eq!(state.player.health, 100);
        assert!(state.player.inventory.is_empty());

        let err = execute(&mut state, &config, Action::move_by(-1, -5)).unwrap_err();
        assert_eq!(err.error_code(), "MOVE_OUT_OF_BOUNDS");
        assert_eq!(err.phase(), Some(TransitionPhase::PreValidate));
        assert_eq!(state.player.position, Position::new(1, 0));
    }

    #[test]
    fn unknown_item_leaves_state_unchanged() {
        let (mut state, config) = potion_scenario();
        let before = state.clone();

        let err = execute(&mut state, &config, Action::pickup("ghost_item")).unwrap_err();

        assert_eq!(err.error_code(), "PICKUP_UNKNOWN_ITEM");
        assert_eq!(state, before);
    }

    #[test]
    fn moves_never_leave_the_map() {
        let config = GameConfig::with_dimensions(4, 3);
        let mut state = GameState::empty(&config);
        let deltas = [
            (1, 0),
            (5, 0),
            (0, 1),
            (-2, 0),
            (3, 2),
            (0, -1),
            (-9, -9),
            (2, 1),
            (1, 1),
            (0, 0),
        ];

        for _ in 0..5 {
            for (dx, dy) in deltas {
                let before = state.player.position;
                let target = Position::new(before.x + dx, before.y + dy);

                match execute(&mut state, &config, Action::move_by(dx, dy)) {
                    Ok(_) => assert_eq!(state.player.position, target),
                    Err(err) => {
                        assert_eq!(err.error_code(), "MOVE_OUT_OF_BOUNDS");
                        assert_eq!(state.player.position, before);
                        assert!(!state.contains(target));
                    }
                }
                assert!(state.contains(state.player.position));
            }
        }
    }

    #[test]
    fn repeated_pickup_adds_item_once() {
        let (mut state, config) = potion_scenario();
        state.player.position = Position::new(1, 0);

        let results: Vec<_> = (0..4)
            .map(|_| execute(&mut state, &config, Action::pickup("potion1")))
            .collect();

        assert!(results[0].is_ok());
        for result in &results[1..] {
            assert_eq!(
                result.as_ref().unwrap_err().error_code(),
                "PICKUP_ALREADY_PICKED"
            );
        }
        assert_eq!(state.player.inventory.len(), 1);
    }

    #[test]
    fn potions_never_exceed_ceiling_nor_reduce_health() {
        let config = GameConfig::default();
        let mut state = GameState::empty(&config);
        state.player.health = 5;
        for i in 0..8 {
            state.insert_item(ItemState::new(
                format!("potion{i}"),
                ItemKind::Potion,
                Position::ORIGIN,
            ));
        }

        for i in 0..8 {
            let id = format!("potion{i}");
            execute(&mut state, &config, Action::pickup(id.as_str())).unwrap();
            let before = state.player.health;
            execute(&mut state, &config, Action::use_item(id.as_str())).unwrap();
            assert!(state.player.health >= before);
            assert!(state.player.health <= config.max_health);
        }
        assert_eq!(state.player.health, 100);
    }

    #[test]
    fn interact_twice_restores_prop() {
        let config = GameConfig::default();
        let mut state = GameState::initial(&config);
        let before = state.clone();

        for target in ["d1", "s1"] {
            let first = execute(&mut state, &config, Action::interact(target)).unwrap();
            assert!(first.changed);
            execute(&mut state, &config, Action::interact(target)).unwrap();
        }

        assert_eq!(state, before);
    }

    #[test]
    fn using_key_reports_no_change() {
        let config = GameConfig::default();
        let mut state = GameState::initial(&config);
        execute(&mut state, &config, Action::move_by(5, 5)).unwrap();
        execute(&mut state, &config, Action::pickup("k1")).unwrap();

        let outcome = execute(&mut state, &config, Action::use_item("k1")).unwrap();

        assert!(!outcome.changed);
        assert_eq!(state.player.inventory, vec![EntityId::from("k1")]);
    }

    #[test]
    fn reset_rebuilds_starting_world() {
        let config = GameConfig::default();
        let mut state = GameState::initial(&config);
        execute(&mut state, &config, Action::move_by(2, 2)).unwrap();
        execute(&mut state, &config, Action::pickup("p1")).unwrap();
        execute(&mut state, &config, Action::interact("d1")).unwrap();

        let outcome = execute(&mut state, &config, Action::reset()).unwrap();

        assert_eq!(outcome.result, ActionResult::Reset);
        assert_eq!(state, GameState::initial(&config));
    }

    #[test]
    fn invariant_violation_rolls_back() {
        let config = GameConfig::default();
        let mut state = GameState::initial(&config);
        // dangling inventory entry makes the state invalid regardless of the action
        state.player.inventory.push("ghost".into());
        let before = state.clone();

        let err = execute(&mut state, &config, Action::interact("d1")).unwrap_err();

        assert!(matches!(err, ExecuteError::InvariantViolated { .. }));
        assert_eq!(state, before);
    }
}
