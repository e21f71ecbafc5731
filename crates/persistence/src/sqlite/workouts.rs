//! Workout log persistence operations

use fitquest_core::{Error, Result, WorkoutSummary};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Workout record stored in database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkoutRow {
    pub id: i64,
    pub actor_id: String,
    pub total_sets: i64,
    pub total_volume: f64,
    pub cardio_minutes: i64,
    pub total_distance: f64,
    pub xp_awarded: i64,
    pub created_at: Option<String>,
}

/// Log a finished workout
pub async fn log_workout(
    pool: &SqlitePool,
    actor_id: &str,
    summary: &WorkoutSummary,
    xp_awarded: u32,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO workouts (actor_id, total_sets, total_volume, cardio_minutes, total_distance, xp_awarded)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(actor_id)
    .bind(summary.total_sets as i64)
    .bind(summary.total_volume)
    .bind(summary.cardio_minutes as i64)
    .bind(summary.total_distance)
    .bind(xp_awarded as i64)
    .execute(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(result.last_insert_rowid())
}

/// Get workouts for an actor, newest first
pub async fn get_workouts(
    pool: &SqlitePool,
    actor_id: &str,
    limit: u32,
    offset: u32,
) -> Result<Vec<WorkoutRow>> {
    let rows = sqlx::query_as::<_, WorkoutRow>(
        r#"
        SELECT id, actor_id, total_sets, total_volume, cardio_minutes, total_distance, xp_awarded, created_at
        FROM workouts
        WHERE actor_id = ?
        ORDER BY created_at DESC, id DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(actor_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(rows)
}

/// Get workout count for an actor
pub async fn count_workouts(pool: &SqlitePool, actor_id: &str) -> Result<u32> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM workouts WHERE actor_id = ?")
        .bind(actor_id)
        .fetch_one(pool)
        .await
        .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(row.0 as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::Database;

    #[tokio::test]
    async fn test_log_and_read_workouts() {
        let db = Database::connect_in_memory().await.unwrap();

        let summary = WorkoutSummary {
            total_sets: 8,
            total_volume: 6675.0,
            cardio_minutes: 20,
            total_distance: 2.5,
        };
        log_workout(db.pool(), "actor-1", &summary, 131).await.unwrap();
        log_workout(db.pool(), "actor-1", &summary, 131).await.unwrap();

        let rows = get_workouts(db.pool(), "actor-1", 10, 0).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total_sets, 8);
        assert_eq!(rows[0].xp_awarded, 131);
        assert_eq!(count_workouts(db.pool(), "actor-1").await.unwrap(), 2);
        assert_eq!(count_workouts(db.pool(), "actor-2").await.unwrap(), 0);
    }
}
