//! Pet evolution rules

use fitquest_core::EvolutionStage;
use serde::{Deserialize, Serialize};

/// Level/streak thresholds for each evolution stage
///
/// Legendary alone requires a streak on top of the level; the lower
/// stages are level-only. That asymmetry is deliberate and matches the
/// game design: the final stage rewards consistency, not just grinding.
#[derive(Debug, Clone)]
pub struct EvolutionThresholds {
    pub baby_level: u32,
    pub teen_level: u32,
    pub adult_level: u32,
    pub legendary_level: u32,
    pub legendary_streak: u32,
}

impl Default for EvolutionThresholds {
    fn default() -> Self {
        Self {
            baby_level: 5,
            teen_level: 10,
            adult_level: 20,
            legendary_level: 30,
            legendary_streak: 30,
        }
    }
}

/// Result of one evolution check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    pub stage: EvolutionStage,
    pub evolved: bool,
}

/// Evaluate the stage for the given level and streak, ratcheted against
/// the current stage.
///
/// The clamp makes this a ratchet rather than a pure step function:
/// even if the inputs would compute a lower stage (say, a stale remote
/// snapshot), the pet never de-evolves.
pub fn evaluate(
    thresholds: &EvolutionThresholds,
    level: u32,
    streak_days: u32,
    current: EvolutionStage,
) -> Evolution {
    let computed = if level >= thresholds.legendary_level && streak_days >= thresholds.legendary_streak
    {
        EvolutionStage::Legendary
    } else if level >= thresholds.adult_level {
        EvolutionStage::Adult
    } else if level >= thresholds.teen_level {
        EvolutionStage::Teen
    } else if level >= thresholds.baby_level {
        EvolutionStage::Baby
    } else {
        EvolutionStage::Egg
    };

    let stage = computed.max(current);
    Evolution {
        stage,
        evolved: stage > current,
    }
}
