//! Error types for action execution pipeline.

use crate::action::{
    ActionTransition, InteractAction, MoveAction, PickupAction, UseItemAction,
};
use crate::error::{ErrorSeverity, GameError};
use crate::state::StateError;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
///
/// The state is unchanged whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("pickup action failed: {0}")]
    Pickup(TransitionPhaseError<<PickupAction as ActionTransition>::Error>),

    #[error("use item action failed: {0}")]
    UseItem(TransitionPhaseError<<UseItemAction as ActionTransition>::Error>),

    #[error("interact action failed: {0}")]
    Interact(TransitionPhaseError<<InteractAction as ActionTransition>::Error>),

    #[error("{action} action broke a state invariant: {error}")]
    InvariantViolated {
        action: String,
        error: StateError,
    },
}

impl ExecuteError {
    /// Pipeline phase that produced the error, if it came from an action.
    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            ExecuteError::Move(e) => Some(e.phase),
            ExecuteError::Pickup(e) => Some(e.phase),
            ExecuteError::UseItem(e) => Some(e.phase),
            ExecuteError::Interact(e) => Some(e.phase),
            ExecuteError::InvariantViolated { .. } => None,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Move(e) => e.error.severity(),
            ExecuteError::Pickup(e) => e.error.severity(),
            ExecuteError::UseItem(e) => e.error.severity(),
            ExecuteError::Interact(e) => e.error.severity(),
            ExecuteError::InvariantViolated { error, .. } => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Move(e) => e.error.error_code(),
            ExecuteError::Pickup(e) => e.error.error_code(),
            ExecuteError::UseItem(e) => e.error.error_code(),
            ExecuteError::Interact(e) => e.error.error_code(),
            ExecuteError::InvariantViolated { error, .. } => error.error_code(),
        }
    }
}
