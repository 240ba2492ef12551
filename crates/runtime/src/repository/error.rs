//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("state repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    /// Slot names must be a single file name: no separators, not `.` or `..`.
    #[error("invalid slot name {0:?}")]
    InvalidSlot(String),

    /// Any failure while reading back a saved state.
    ///
    /// Load failures are reported as this single coarse signal; `reason` carries
    /// the underlying I/O, parse, or validation message for diagnostics.
    #[error("failed to load game state from {location}: {reason}")]
    LoadFailed { location: String, reason: String },
}

impl RepositoryError {
    /// Wraps `error` as a [`RepositoryError::LoadFailed`] for `location`.
    pub fn load_failed(location: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self::LoadFailed {
            location: location.into(),
            reason: error.to_string(),
        }
    }

    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::LoadFailed { .. })
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
