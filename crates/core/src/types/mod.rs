//! Shared type definitions used across the engine

use serde::{Deserialize, Serialize};

/// Which player stat a quest reward feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatKind {
    Strength,
    Agility,
    Stamina,
}

impl StatKind {
    /// Short display code ("STR", "AGL", "STA")
    pub fn code(&self) -> &'static str {
        match self {
            StatKind::Strength => "STR",
            StatKind::Agility => "AGL",
            StatKind::Stamina => "STA",
        }
    }
}

/// Shop item category tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Cosmetic,
    Powerup,
    Pet,
}

/// Pet evolution tier, strictly ordered
///
/// Ordering matters: the evolution ratchet is `max(computed, current)`,
/// so a stage never regresses once reached.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum EvolutionStage {
    #[default]
    Egg,
    Baby,
    Teen,
    Adult,
    Legendary,
}

impl EvolutionStage {
    pub fn display_name(&self) -> &'static str {
        match self {
            EvolutionStage::Egg => "Egg",
            EvolutionStage::Baby => "Baby",
            EvolutionStage::Teen => "Teen",
            EvolutionStage::Adult => "Adult",
            EvolutionStage::Legendary => "Legendary",
        }
    }

    /// Stable numeric form for storage (0=Egg .. 4=Legendary)
    pub fn as_index(&self) -> u32 {
        *self as u32
    }

    pub fn from_index(index: u32) -> Self {
        match index {
            0 => EvolutionStage::Egg,
            1 => EvolutionStage::Baby,
            2 => EvolutionStage::Teen,
            3 => EvolutionStage::Adult,
            _ => EvolutionStage::Legendary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_ordering() {
        assert!(EvolutionStage::Egg < EvolutionStage::Baby);
        assert!(EvolutionStage::Baby < EvolutionStage::Teen);
        assert!(EvolutionStage::Teen < EvolutionStage::Adult);
        assert!(EvolutionStage::Adult < EvolutionStage::Legendary);
    }

    #[test]
    fn test_stage_index_roundtrip() {
        for stage in [
            EvolutionStage::Egg,
            EvolutionStage::Baby,
            EvolutionStage::Teen,
            EvolutionStage::Adult,
            EvolutionStage::Legendary,
        ] {
            assert_eq!(EvolutionStage::from_index(stage.as_index()), stage);
        }
    }
}
