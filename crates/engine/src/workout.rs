//! Workout scoring: exercises -> stat XP -> level progress

use crate::progression::{self, XpGrant};
use fitquest_core::{Error, Exercise, PlayerProfile, Result, WorkoutSummary};
use serde::{Deserialize, Serialize};

/// Per-stat XP earned by one workout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatXp {
    pub strength: u32,
    pub agility: u32,
    pub stamina: u32,
}

impl StatXp {
    pub fn total(&self) -> u32 {
        self.strength + self.agility + self.stamina
    }
}

/// A scored workout, ready to apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutOutcome {
    pub summary: WorkoutSummary,
    pub stat_xp: StatXp,
}

/// Score a finished workout.
///
/// Strength XP comes from lifted volume, agility from distance, stamina
/// from cardio minutes. An empty session is a caller error: there is
/// nothing to award.
pub fn score_workout(exercises: &[Exercise]) -> Result<WorkoutOutcome> {
    if exercises.is_empty() {
        return Err(Error::EmptyWorkout);
    }

    let summary = WorkoutSummary::from_exercises(exercises);
    let stat_xp = StatXp {
        strength: (summary.total_volume / 100.0) as u32,
        agility: (summary.total_distance * 10.0) as u32,
        stamina: summary.cardio_minutes * 2,
    };

    Ok(WorkoutOutcome { summary, stat_xp })
}

/// Score the workout and apply it to the player: total XP to the level
/// track, per-stat XP to the stat block. Returns the outcome plus the
/// level-grant result.
pub fn apply_workout(
    profile: &mut PlayerProfile,
    exercises: &[Exercise],
) -> Result<(WorkoutOutcome, Option<XpGrant>)> {
    let outcome = score_workout(exercises)?;

    profile.stats.strength += outcome.stat_xp.strength;
    profile.stats.agility += outcome.stat_xp.agility;
    profile.stats.stamina += outcome.stat_xp.stamina;

    // A light session can score zero XP (e.g., one unweighted set); that
    // is a valid workout, just not a grant.
    let grant = match outcome.stat_xp.total() {
        0 => None,
        total => Some(progression::grant_xp(&mut profile.progress, total)?),
    };

    Ok((outcome, grant))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_formula() {
        let exercises = vec![
            Exercise::strength("Bench Press", 3, 10, 135.0), // volume 4050
            Exercise::cardio("Treadmill", 20, 2.5),
        ];
        let outcome = score_workout(&exercises).unwrap();

        assert_eq!(outcome.stat_xp.strength, 40); // 4050 / 100
        assert_eq!(outcome.stat_xp.agility, 25); // 2.5 * 10
        assert_eq!(outcome.stat_xp.stamina, 40); // 20 * 2
        assert_eq!(outcome.stat_xp.total(), 105);
    }

    #[test]
    fn test_empty_workout_is_rejected() {
        assert!(matches!(score_workout(&[]), Err(Error::EmptyWorkout)));
    }

    #[test]
    fn test_apply_workout_moves_stats_and_level() {
        let mut profile = PlayerProfile::default();
        let exercises = vec![
            Exercise::strength("Squat", 5, 5, 225.0), // volume 5625 -> 56 STR
            Exercise::cardio("Row", 30, 0.0),         // 60 STA
        ];

        let (outcome, grant) = apply_workout(&mut profile, &exercises).unwrap();
        assert_eq!(outcome.stat_xp.total(), 116);
        assert_eq!(profile.stats.strength, 10 + 56);
        assert_eq!(profile.stats.stamina, 10 + 60);
        assert_eq!(profile.stats.agility, 10);

        let grant = grant.unwrap();
        assert_eq!(grant.levels_gained, 1);
        assert_eq!(profile.progress.level, 2);
        assert_eq!(profile.progress.current_xp, 16);
    }

    #[test]
    fn test_zero_score_session_grants_nothing() {
        let mut profile = PlayerProfile::default();
        let exercises = vec![Exercise::strength("Stretching", 1, 5, 0.0)];

        let (outcome, grant) = apply_workout(&mut profile, &exercises).unwrap();
        assert_eq!(outcome.stat_xp.total(), 0);
        assert!(grant.is_none());
        assert_eq!(profile.progress, fitquest_core::LevelProgress::default());
    }
}
