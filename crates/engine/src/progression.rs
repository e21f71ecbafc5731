//! XP grants and level-up normalization

use fitquest_core::{Error, LevelProgress, Result};
use serde::{Deserialize, Serialize};

/// Threshold growth factor per level
const LEVEL_CURVE_FACTOR: f64 = 1.5;

/// Outcome of one XP grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpGrant {
    pub levels_gained: u32,
    pub level: u32,
    pub current_xp: u32,
    pub xp_to_next_level: u32,
}

/// Add `amount` XP to `progress`, converting overflow into level-ups.
///
/// A single large grant can cross several thresholds; the loop consumes
/// one threshold per level and grows the next by ×1.5 (floored), so the
/// resting invariant `current_xp < xp_to_next_level` always holds on
/// return. Zero is a caller error, reported rather than ignored.
pub fn grant_xp(progress: &mut LevelProgress, amount: u32) -> Result<XpGrant> {
    if amount == 0 {
        return Err(Error::InvalidXpAmount);
    }

    progress.current_xp += amount;

    let mut levels_gained = 0;
    while progress.current_xp >= progress.xp_to_next_level {
        progress.current_xp -= progress.xp_to_next_level;
        progress.level += 1;
        progress.xp_to_next_level = (progress.xp_to_next_level as f64 * LEVEL_CURVE_FACTOR) as u32;
        levels_gained += 1;
    }

    Ok(XpGrant {
        levels_gained,
        level: progress.level,
        current_xp: progress.current_xp,
        xp_to_next_level: progress.xp_to_next_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_grant_no_level_up() {
        let mut progress = LevelProgress::default();
        let grant = grant_xp(&mut progress, 40).unwrap();

        assert_eq!(grant.levels_gained, 0);
        assert_eq!(progress.level, 1);
        assert_eq!(progress.current_xp, 40);
        assert_eq!(progress.xp_to_next_level, 100);
    }

    #[test]
    fn test_exact_threshold_levels_up() {
        let mut progress = LevelProgress::default();
        let grant = grant_xp(&mut progress, 100).unwrap();

        assert_eq!(grant.levels_gained, 1);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.current_xp, 0);
        assert_eq!(progress.xp_to_next_level, 150);
    }

    #[test]
    fn test_multi_level_grant() {
        // 250 XP from a fresh track: 100 consumed -> level 2 (threshold 150),
        // 150 consumed -> level 3 (threshold 225), 0 remaining.
        let mut progress = LevelProgress::default();
        let grant = grant_xp(&mut progress, 250).unwrap();

        assert_eq!(grant.levels_gained, 2);
        assert_eq!(progress.level, 3);
        assert_eq!(progress.current_xp, 0);
        assert_eq!(progress.xp_to_next_level, 225);
    }

    #[test]
    fn test_xp_is_conserved() {
        // Sum of consumed thresholds plus the remainder must equal the
        // starting XP plus the grant.
        let mut progress = LevelProgress {
            level: 2,
            current_xp: 75,
            xp_to_next_level: 150,
        };
        let before = progress;
        let amount = 1234;

        let grant = grant_xp(&mut progress, amount).unwrap();

        let consumed: u32 = (before.level..grant.level)
            .map(fitquest_core::xp_threshold_for_level)
            .sum();
        assert!(progress.current_xp < progress.xp_to_next_level);
        assert_eq!(consumed + progress.current_xp, before.current_xp + amount);
    }

    #[test]
    fn test_zero_grant_is_rejected() {
        let mut progress = LevelProgress::default();
        assert!(matches!(
            grant_xp(&mut progress, 0),
            Err(Error::InvalidXpAmount)
        ));
        assert_eq!(progress, LevelProgress::default());
    }
}
