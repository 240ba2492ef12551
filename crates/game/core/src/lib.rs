//! Deterministic game rules and data types.
//!
//! `game-core` defines the canonical rules (actions, engine, world state) and
//! exposes pure APIs that can be reused by the runtime and by tests.
//! All state mutation flows through [`engine::GameEngine`], and supporting
//! crates depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionResult, ActionTransition, CardinalDirection, InteractAction, InteractError,
    MoveAction, MoveError, PickupAction, PickupError, ResetAction, UseItemAction, UseItemError,
    UseOutcome,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    EntityId, GameState, ItemKind, ItemState, PlayerState, Position, PropKind, PropState,
    StateError,
};
