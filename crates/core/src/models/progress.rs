//! Experience and level tracking shared by the player and the pet

use serde::{Deserialize, Serialize};

/// Base XP required to go from level 1 to level 2
pub const BASE_XP_TO_NEXT_LEVEL: u32 = 100;

/// Experience/level state for one actor (the player or the pet)
///
/// At rest `current_xp < xp_to_next_level`; the grant operation in the
/// engine normalizes overflow into level-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub level: u32,
    pub current_xp: u32,
    pub xp_to_next_level: u32,
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self {
            level: 1,
            current_xp: 0,
            xp_to_next_level: BASE_XP_TO_NEXT_LEVEL,
        }
    }
}

impl LevelProgress {
    /// Fraction of the way to the next level, for progress bars
    pub fn fraction(&self) -> f64 {
        if self.xp_to_next_level == 0 {
            return 0.0;
        }
        self.current_xp as f64 / self.xp_to_next_level as f64
    }
}
