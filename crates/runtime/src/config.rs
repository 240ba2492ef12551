//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::GameConfig;

/// Configuration shared by the session and its repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// File used by `Session::save` / `Session::load`.
    pub save_path: PathBuf,
    /// Directory holding named save slots.
    pub save_dir: PathBuf,
}

impl RuntimeConfig {
    pub const DEFAULT_SAVE_PATH: &'static str = "saves/save1.json";
    pub const DEFAULT_SAVE_DIR: &'static str = "saves";

    pub fn new(game_config: GameConfig) -> Self {
        Self {
            game_config,
            save_path: PathBuf::from(Self::DEFAULT_SAVE_PATH),
            save_dir: PathBuf::from(Self::DEFAULT_SAVE_DIR),
        }
    }

    pub fn with_save_path(mut self, save_path: impl Into<PathBuf>) -> Self {
        self.save_path = save_path.into();
        self
    }

    pub fn with_save_dir(mut self, save_dir: impl Into<PathBuf>) -> Self {
        self.save_dir = save_dir.into();
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_SAVE_PATH` - Save file for save/load (default: `saves/save1.json`)
    /// - `GAME_SAVE_DIR` - Directory for named slots (default: `saves`)
    /// - `GAME_MAP_WIDTH` - Map width in tiles (default: 10)
    /// - `GAME_MAP_HEIGHT` - Map height in tiles (default: 10)
    /// - `GAME_MAX_HEALTH` - Player health ceiling (default: 100)
    /// - `GAME_POTION_POTENCY` - Health restored per potion (default: 20)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<i32>("GAME_MAP_WIDTH") {
            config.game_config.width = width.max(1);
        }

        if let Some(height) = read_env::<i32>("GAME_MAP_HEIGHT") {
            config.game_config.height = height.max(1);
        }

        if let Some(max_health) = read_env::<i32>("GAME_MAX_HEALTH") {
            config.game_config.max_health = max_health.max(1);
        }

        if let Some(potency) = read_env::<i32>("GAME_POTION_POTENCY") {
            config.game_config.potion_potency = potency.max(0);
        }

        if let Ok(path) = env::var("GAME_SAVE_PATH") {
            config.save_path = PathBuf::from(path);
        }

        if let Ok(dir) = env::var("GAME_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }

        config
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
