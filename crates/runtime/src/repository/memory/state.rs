//! In-memory StateRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use game_core::GameState;

use crate::repository::error::{RepositoryError, Result};
use crate::repository::StateRepository;

/// In-memory implementation of StateRepository.
///
/// Stores state clones indexed by slot for testing and local development.
pub struct InMemoryStateRepo {
    states: RwLock<BTreeMap<String, GameState>>,
}

impl InMemoryStateRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            states: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create with an initial state in `slot`.
    pub fn with_state(slot: impl Into<String>, state: GameState) -> Self {
        let mut states = BTreeMap::new();
        states.insert(slot.into(), state);
        Self {
            states: RwLock::new(states),
        }
    }
}

impl Default for InMemoryStateRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, slot: &str, state: &GameState) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        states.insert(slot.to_owned(), state.clone());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<GameState>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.get(slot).cloned())
    }

    fn exists(&self, slot: &str) -> bool {
        self.states
            .read()
            .map(|states| states.contains_key(slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        states.remove(slot);
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.keys().cloned().collect())
    }
}
