//! Repository contracts for saving and loading mutable game state.

use game_core::GameState;

use super::error::Result;

/// Repository for game state persistence and loading.
///
/// States are stored under caller-chosen slot names (`"save1"`, `"autosave"`).
pub trait StateRepository: Send + Sync {
    /// Save a game state under `slot`, replacing any previous save.
    fn save(&self, slot: &str, state: &GameState) -> Result<()>;

    /// Load the game state stored under `slot`.
    ///
    /// Returns `Ok(None)` when the slot has never been written.
    fn load(&self, slot: &str) -> Result<Option<GameState>>;

    /// Check if a slot exists
    fn exists(&self, slot: &str) -> bool;

    /// Delete a slot
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all slot names, sorted
    fn list_slots(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
