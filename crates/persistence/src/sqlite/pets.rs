//! Pet state CRUD operations

use chrono::{DateTime, Utc};
use fitquest_core::{Error, EvolutionStage, LevelProgress, Pet, Result};
use sqlx::SqlitePool;

/// Database row for the pets table
#[derive(Debug, sqlx::FromRow)]
struct PetRow {
    name: String,
    level: i64,
    current_xp: i64,
    xp_to_next_level: i64,
    stage: i64,
    happiness: i64,
    energy: i64,
    streak_days: i64,
    last_fed: Option<DateTime<Utc>>,
}

impl From<PetRow> for Pet {
    fn from(row: PetRow) -> Self {
        Pet {
            name: row.name,
            progress: LevelProgress {
                level: row.level as u32,
                current_xp: row.current_xp as u32,
                xp_to_next_level: row.xp_to_next_level as u32,
            },
            stage: EvolutionStage::from_index(row.stage as u32),
            happiness: row.happiness as u32,
            energy: row.energy as u32,
            streak_days: row.streak_days as u32,
            last_fed: row.last_fed.unwrap_or_else(Utc::now),
        }
    }
}

/// Insert or replace the pet belonging to an actor
pub async fn save_pet(pool: &SqlitePool, actor_id: &str, pet: &Pet) -> Result<()> {
    sqlx::query(
        r#"
        INSERT OR REPLACE INTO pets (
            actor_id, name, level, current_xp, xp_to_next_level,
            stage, happiness, energy, streak_days, last_fed
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(actor_id)
    .bind(&pet.name)
    .bind(pet.progress.level as i64)
    .bind(pet.progress.current_xp as i64)
    .bind(pet.progress.xp_to_next_level as i64)
    .bind(pet.stage.as_index() as i64)
    .bind(pet.happiness as i64)
    .bind(pet.energy as i64)
    .bind(pet.streak_days as i64)
    .bind(pet.last_fed)
    .execute(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(())
}

/// Load the pet belonging to an actor, if one exists
pub async fn load_pet(pool: &SqlitePool, actor_id: &str) -> Result<Option<Pet>> {
    let row: Option<PetRow> = sqlx::query_as(
        r#"
        SELECT name, level, current_xp, xp_to_next_level,
               stage, happiness, energy, streak_days, last_fed
        FROM pets
        WHERE actor_id = ?
        "#,
    )
    .bind(actor_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(row.map(Pet::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::Database;

    #[tokio::test]
    async fn test_pet_roundtrip() {
        let db = Database::connect_in_memory().await.unwrap();

        let mut pet = Pet::new("Scales");
        pet.progress.level = 12;
        pet.progress.current_xp = 30;
        pet.stage = EvolutionStage::Teen;
        pet.energy = 40;
        pet.streak_days = 15;

        save_pet(db.pool(), "actor-1", &pet).await.unwrap();
        let loaded = load_pet(db.pool(), "actor-1").await.unwrap().unwrap();

        assert_eq!(loaded.name, "Scales");
        assert_eq!(loaded.progress.level, 12);
        assert_eq!(loaded.stage, EvolutionStage::Teen);
        assert_eq!(loaded.streak_days, 15);
    }

    #[tokio::test]
    async fn test_missing_pet_is_none() {
        let db = Database::connect_in_memory().await.unwrap();
        assert!(load_pet(db.pool(), "actor-1").await.unwrap().is_none());
    }
}
