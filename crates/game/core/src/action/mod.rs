//! Action domain - validated state transitions.
//!
//! Every action the player can take is a small type implementing
//! [`ActionTransition`]. The engine drives each one through
//! `pre_validate → apply → post_validate`.
//!
//! # Module Structure
//!
//! - `movement`: Move the player by an arbitrary delta
//! - `inventory`: Pick up items and use them
//! - `interact`: Toggle doors and switches
//! - `reset`: Rebuild the starting world

pub mod interact;
pub mod inventory;
pub mod movement;
pub mod reset;

pub use interact::{InteractAction, InteractError};
pub use inventory::{PickupAction, PickupError, UseItemAction, UseItemError, UseOutcome};
pub use movement::{CardinalDirection, MoveAction, MoveError};
pub use reset::ResetAction;

use crate::config::GameConfig;
use crate::state::{EntityId, GameState, Position};

/// Defines how a concrete action variant mutates game state.
///
/// `pre_validate` must reject every caller mistake so that `apply` only runs on
/// input it can fully honour. `post_validate` re-checks the state invariants the
/// action could have touched. All hooks receive the rules via `GameConfig` and
/// must stay free of side effects other than the mutation in `apply`.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations should
    /// assume that `pre_validate` has already run successfully.
    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level action enum accepted by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Pickup(PickupAction),
    UseItem(UseItemAction),
    Interact(InteractAction),
    Reset(ResetAction),
}

impl Action {
    pub fn move_by(dx: i32, dy: i32) -> Self {
        Self::Move(MoveAction::new(dx, dy))
    }

    pub fn pickup(item: impl Into<EntityId>) -> Self {
        Self::Pickup(PickupAction::new(item))
    }

    pub fn use_item(item: impl Into<EntityId>) -> Self {
        Self::UseItem(UseItemAction::new(item))
    }

    pub fn interact(target: impl Into<EntityId>) -> Self {
        Self::Interact(InteractAction::new(target))
    }

    pub fn reset() -> Self {
        Self::Reset(ResetAction)
    }

    /// Returns the snake_case string representation of the action.
    ///
    /// Used for logging and error reporting.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Pickup(_) => "pickup",
            Action::UseItem(_) => "use_item",
            Action::Interact(_) => "interact",
            Action::Reset(_) => "reset",
        }
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<PickupAction> for Action {
    fn from(action: PickupAction) -> Self {
        Self::Pickup(action)
    }
}

impl From<UseItemAction> for Action {
    fn from(action: UseItemAction) -> Self {
        Self::UseItem(action)
    }
}

impl From<InteractAction> for Action {
    fn from(action: InteractAction) -> Self {
        Self::Interact(action)
    }
}

impl From<ResetAction> for Action {
    fn from(action: ResetAction) -> Self {
        Self::Reset(action)
    }
}

/// Action-specific result of a successful execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Moved { from: Position, to: Position },
    PickedUp { item: EntityId },
    Used { item: EntityId, outcome: UseOutcome },
    Interacted { target: EntityId, is_active: bool },
    Reset,
}
