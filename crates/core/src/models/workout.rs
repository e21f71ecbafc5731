//! Logged exercises and per-workout aggregates

use serde::{Deserialize, Serialize};

/// A single logged exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    #[serde(flatten)]
    pub kind: ExerciseKind,
}

/// Strength work is sets × reps @ weight; cardio is minutes + distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExerciseKind {
    Strength { sets: u32, reps: u32, weight: f64 },
    Cardio { minutes: u32, distance: f64 },
}

impl Exercise {
    pub fn strength(name: impl Into<String>, sets: u32, reps: u32, weight: f64) -> Self {
        Self {
            name: name.into(),
            kind: ExerciseKind::Strength { sets, reps, weight },
        }
    }

    pub fn cardio(name: impl Into<String>, minutes: u32, distance: f64) -> Self {
        Self {
            name: name.into(),
            kind: ExerciseKind::Cardio { minutes, distance },
        }
    }
}

/// Totals for one workout session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    pub total_sets: u32,
    /// sets × reps × weight summed over strength exercises
    pub total_volume: f64,
    pub cardio_minutes: u32,
    pub total_distance: f64,
}

impl WorkoutSummary {
    pub fn from_exercises(exercises: &[Exercise]) -> Self {
        let mut summary = WorkoutSummary::default();
        for exercise in exercises {
            match exercise.kind {
                ExerciseKind::Strength { sets, reps, weight } => {
                    summary.total_sets += sets;
                    summary.total_volume += sets as f64 * reps as f64 * weight;
                }
                ExerciseKind::Cardio { minutes, distance } => {
                    summary.cardio_minutes += minutes;
                    summary.total_distance += distance;
                }
            }
        }
        summary
    }
}
