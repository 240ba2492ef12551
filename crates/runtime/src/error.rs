//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the engine and the repositories so clients can bubble
//! them up with consistent context.
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The action was rejected; the state is unchanged.
    #[error(transparent)]
    Execute(#[from] game_core::ExecuteError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("save slot {0} not found")]
    SlotNotFound(String),

    #[error("invalid state override: {0}")]
    InvalidState(#[from] game_core::StateError),
}

impl RuntimeError {
    /// Stable identifier for logs and tests.
    pub fn error_code(&self) -> &'static str {
        use game_core::GameError;

        match self {
            RuntimeError::Execute(error) => error.error_code(),
            RuntimeError::Repository(RepositoryError::LoadFailed { .. }) => "LOAD_FAILED",
            RuntimeError::Repository(_) => "REPOSITORY",
            RuntimeError::SlotNotFound(_) => "SLOT_NOT_FOUND",
            RuntimeError::InvalidState(error) => error.error_code(),
        }
    }
}
