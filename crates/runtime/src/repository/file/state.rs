//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::{GameConfig, GameState};

use crate::repository::error::{RepositoryError, Result};
use crate::repository::snapshot::{encode_state, parse_state};
use crate::repository::StateRepository;

/// Writes `state` as pretty JSON to `path`.
///
/// Missing parent directories are created. The file is written to a sibling
/// temp file first and renamed into place, so a crash never leaves a
/// half-written save behind.
pub fn save_to_path(path: impl AsRef<Path>, state: &GameState) -> Result<()> {
    let path = path.as_ref();
    let json = encode_state(state)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    if let Err(error) = fs::write(&temp_path, json).and_then(|()| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(error.into());
    }

    tracing::debug!("Saved state to {}", path.display());

    Ok(())
}

/// Reads and validates the save at `path`.
///
/// Every failure (missing file, bad JSON, missing fields, broken invariants)
/// is reported as [`RepositoryError::LoadFailed`].
pub fn load_from_path(path: impl AsRef<Path>, config: &GameConfig) -> Result<GameState> {
    let path = path.as_ref();
    let location = path.display().to_string();

    let contents =
        fs::read_to_string(path).map_err(|e| RepositoryError::load_failed(&location, e))?;
    let state =
        parse_state(&contents, config).map_err(|e| RepositoryError::load_failed(&location, e))?;

    tracing::debug!("Loaded state from {}", location);

    Ok(state)
}

/// File-based implementation of StateRepository.
///
/// Stores game states as individual JSON files named after their slot.
///
/// # File Format
///
/// States are stored as `{slot}.json` in the schema described in
/// [`snapshot`](crate::repository::snapshot), so saves can be read and edited by hand.
pub struct FileStateRepository {
    base_dir: PathBuf,
    config: GameConfig,
}

impl FileStateRepository {
    /// Create a new file-based state repository.
    ///
    /// `config` supplies the rules loaded states are validated against.
    pub fn new(base_dir: impl AsRef<Path>, config: GameConfig) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir, config })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a slot file.
    ///
    /// Rejects names that would resolve outside `base_dir`.
    pub fn slot_path(&self, slot: &str) -> Result<PathBuf> {
        if slot.is_empty() || slot == "." || slot == ".." || slot.contains(['/', '\\']) {
            return Err(RepositoryError::InvalidSlot(slot.to_owned()));
        }
        Ok(self.base_dir.join(format!("{}.json", slot)))
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, slot: &str, state: &GameState) -> Result<()> {
        save_to_path(self.slot_path(slot)?, state)
    }

    fn load(&self, slot: &str) -> Result<Option<GameState>> {
        let path = self.slot_path(slot)?;

        if !path.exists() {
            return Ok(None);
        }

        load_from_path(&path, &self.config).map(Some)
    }

    fn exists(&self, slot: &str) -> bool {
        self.slot_path(slot).is_ok_and(|path| path.exists())
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted slot {}", slot);
        }

        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let mut slots = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(slot) = filename.strip_suffix(".json")
            {
                slots.push(slot.to_owned());
            }
        }

        slots.sort_unstable();
        Ok(slots)
    }
}
