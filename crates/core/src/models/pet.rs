//! The virtual pet raised alongside the player

use crate::models::LevelProgress;
use crate::types::EvolutionStage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PET_NAME: &str = "Buddy";

/// Happiness and energy are percentages, clamped to this ceiling
pub const PET_METER_MAX: u32 = 100;

/// Pet state: its own level track plus care meters and the activity streak
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub name: String,
    pub progress: LevelProgress,
    pub stage: EvolutionStage,
    pub happiness: u32,
    pub energy: u32,
    /// Days of consistent activity
    pub streak_days: u32,
    pub last_fed: DateTime<Utc>,
}

impl Pet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            progress: LevelProgress::default(),
            stage: EvolutionStage::Egg,
            happiness: 80,
            energy: 75,
            streak_days: 0,
            last_fed: Utc::now(),
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.trim().is_empty() {
            self.name = name;
        }
    }
}

impl Default for Pet {
    fn default() -> Self {
        Self::new(DEFAULT_PET_NAME)
    }
}
