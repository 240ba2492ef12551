//! Single-player session: the live state plus the means to persist it.
//!
//! [`Session`] is the facade drivers talk to. It owns the authoritative
//! [`GameState`], routes every action through [`GameEngine`], and snapshots or
//! restores the state through a [`StateRepository`] or an explicit file path.

use std::path::Path;

use game_core::{
    Action, CardinalDirection, EntityId, ExecutionOutcome, GameError, GameEngine, GameState,
    MoveAction, StateError,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::repository::{FileStateRepository, StateRepository, load_from_path, save_to_path};

pub struct Session<R = FileStateRepository> {
    config: RuntimeConfig,
    state: GameState,
    repository: R,
}

impl Session<FileStateRepository> {
    /// Opens a session backed by JSON files under `config.save_dir`.
    pub fn open(config: RuntimeConfig) -> Result<Self> {
        let repository = FileStateRepository::new(&config.save_dir, config.game_config.clone())?;
        Ok(Self::with_repository(config, repository))
    }
}

impl<R: StateRepository> Session<R> {
    /// Starts a fresh game in the initial world.
    pub fn with_repository(config: RuntimeConfig, repository: R) -> Self {
        let state = GameState::initial(&config.game_config);
        tracing::info!(
            width = state.width,
            height = state.height,
            "Session started"
        );
        Self {
            config,
            state,
            repository,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Executes one action against the live state.
    ///
    /// Rejected actions are logged and returned; the state is left untouched.
    pub fn execute(&mut self, action: Action) -> Result<ExecutionOutcome> {
        let name = action.as_snake_case();
        let mut engine = GameEngine::new(&mut self.state, &self.config.game_config);

        match engine.execute(&action) {
            Ok(outcome) => {
                tracing::info!(action = name, result = ?outcome.result, "Action applied");
                Ok(outcome)
            }
            Err(error) => {
                tracing::warn!(
                    action = name,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "Action rejected: {}",
                    error
                );
                Err(error.into())
            }
        }
    }

    pub fn move_player(&mut self, dx: i32, dy: i32) -> Result<ExecutionOutcome> {
        self.execute(Action::move_by(dx, dy))
    }

    pub fn step(&mut self, direction: CardinalDirection) -> Result<ExecutionOutcome> {
        self.execute(MoveAction::step(direction).into())
    }

    pub fn pickup(&mut self, item: impl Into<EntityId>) -> Result<ExecutionOutcome> {
        self.execute(Action::pickup(item))
    }

    pub fn use_item(&mut self, item: impl Into<EntityId>) -> Result<ExecutionOutcome> {
        self.execute(Action::use_item(item))
    }

    pub fn interact(&mut self, target: impl Into<EntityId>) -> Result<ExecutionOutcome> {
        self.execute(Action::interact(target))
    }

    /// Replaces the state with the initial world.
    pub fn reset(&mut self) -> Result<ExecutionOutcome> {
        self.execute(Action::reset())
    }

    /// Overrides the player's health, e.g. to stage a scenario.
    ///
    /// The value must stay within `0..=max_health`.
    pub fn set_player_health(&mut self, health: i32) -> Result<()> {
        let max = self.config.game_config.max_health;
        if !(0..=max).contains(&health) {
            return Err(StateError::HealthOutOfRange { health, max }.into());
        }

        tracing::debug!(from = self.state.player.health, to = health, "Health override");
        self.state.player.health = health;
        Ok(())
    }

    /// Saves to the configured `save_path`.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.config.save_path)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        save_to_path(path, &self.state)?;
        tracing::info!("Game saved to {}", path.display());
        Ok(())
    }

    /// Loads from the configured `save_path`, replacing the live state.
    pub fn load(&mut self) -> Result<()> {
        let path = self.config.save_path.clone();
        self.load_from(path)
    }

    /// Loads from `path`, replacing the live state only on success.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match load_from_path(path, &self.config.game_config) {
            Ok(state) => {
                self.state = state;
                tracing::info!("Game loaded from {}", path.display());
                Ok(())
            }
            Err(error) => {
                tracing::warn!("Load failed: {}", error);
                Err(error.into())
            }
        }
    }

    pub fn save_slot(&self, slot: &str) -> Result<()> {
        self.repository.save(slot, &self.state)?;
        tracing::info!(slot, "Game saved");
        Ok(())
    }

    /// Loads a named slot, replacing the live state only on success.
    pub fn load_slot(&mut self, slot: &str) -> Result<()> {
        let state = self
            .repository
            .load(slot)?
            .ok_or_else(|| RuntimeError::SlotNotFound(slot.to_owned()))?;
        self.state = state;
        tracing::info!(slot, "Game loaded");
        Ok(())
    }
}
