/// Game configuration constants and tunable parameters.
///
/// Passed explicitly to state construction, reset, and every transition so the
/// rules never read ambient globals.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Map width in tiles. Valid x coordinates are `0..width`.
    pub width: i32,
    /// Map height in tiles. Valid y coordinates are `0..height`.
    pub height: i32,
    /// Health ceiling for the player.
    pub max_health: i32,
    /// Health restored by a single potion before clamping.
    pub potion_potency: i32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WIDTH: i32 = 10;
    pub const DEFAULT_HEIGHT: i32 = 10;
    pub const DEFAULT_MAX_HEALTH: i32 = 100;
    pub const DEFAULT_POTION_POTENCY: i32 = 20;

    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            max_health: Self::DEFAULT_MAX_HEALTH,
            potion_potency: Self::DEFAULT_POTION_POTENCY,
        }
    }

    pub fn with_dimensions(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::new()
        }
    }

    pub fn with_potion_potency(mut self, potion_potency: i32) -> Self {
        self.potion_potency = potion_potency;
        self
    }

    pub fn with_max_health(mut self, max_health: i32) -> Self {
        self.max_health = max_health;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
