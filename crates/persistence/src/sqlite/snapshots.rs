//! Player snapshot CRUD operations

use chrono::{DateTime, Utc};
use fitquest_core::{Error, PlayerSnapshot, Result};
use sqlx::SqlitePool;
use std::collections::BTreeSet;

/// Database row for the players table
#[derive(Debug, sqlx::FromRow)]
struct PlayerRow {
    actor_id: String,
    name: String,
    email: String,
    level: i64,
    current_xp: i64,
    xp_to_next_level: i64,
    strength: i64,
    agility: i64,
    stamina: i64,
    streak_days: i64,
    balance: i64,
    active_theme: String,
    updated_at: Option<DateTime<Utc>>,
}

impl PlayerRow {
    fn into_snapshot(
        self,
        owned_items: BTreeSet<u32>,
        unlocked_themes: BTreeSet<String>,
    ) -> PlayerSnapshot {
        PlayerSnapshot {
            actor_id: self.actor_id,
            name: self.name,
            email: self.email,
            level: self.level as u32,
            current_xp: self.current_xp as u32,
            xp_to_next_level: self.xp_to_next_level as u32,
            strength: self.strength as u32,
            agility: self.agility as u32,
            stamina: self.stamina as u32,
            streak_days: self.streak_days as u32,
            balance: self.balance as u32,
            owned_items,
            unlocked_themes,
            active_theme: self.active_theme,
            updated_at: self.updated_at,
        }
    }
}

/// Insert or replace the snapshot for an actor, including its ownership sets
pub async fn save_snapshot(pool: &SqlitePool, snapshot: &PlayerSnapshot) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO players (
            actor_id, name, email, level, current_xp, xp_to_next_level,
            strength, agility, stamina, streak_days, balance, active_theme,
            updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(actor_id) DO UPDATE SET
            name = excluded.name,
            email = excluded.email,
            level = excluded.level,
            current_xp = excluded.current_xp,
            xp_to_next_level = excluded.xp_to_next_level,
            strength = excluded.strength,
            agility = excluded.agility,
            stamina = excluded.stamina,
            streak_days = excluded.streak_days,
            balance = excluded.balance,
            active_theme = excluded.active_theme,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(&snapshot.actor_id)
    .bind(&snapshot.name)
    .bind(&snapshot.email)
    .bind(snapshot.level as i64)
    .bind(snapshot.current_xp as i64)
    .bind(snapshot.xp_to_next_level as i64)
    .bind(snapshot.strength as i64)
    .bind(snapshot.agility as i64)
    .bind(snapshot.stamina as i64)
    .bind(snapshot.streak_days as i64)
    .bind(snapshot.balance as i64)
    .bind(&snapshot.active_theme)
    .execute(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    // Ownership is monotonic, so inserts are enough; a full replace keeps
    // the row set exact anyway if a caller ever rewrites history.
    sqlx::query("DELETE FROM owned_items WHERE actor_id = ?")
        .bind(&snapshot.actor_id)
        .execute(pool)
        .await
        .map_err(|e| Error::DatabaseError(e.to_string()))?;
    for item_id in &snapshot.owned_items {
        sqlx::query("INSERT OR IGNORE INTO owned_items (actor_id, item_id) VALUES (?, ?)")
            .bind(&snapshot.actor_id)
            .bind(*item_id as i64)
            .execute(pool)
            .await
            .map_err(|e| Error::DatabaseError(e.to_string()))?;
    }

    sqlx::query("DELETE FROM unlocked_themes WHERE actor_id = ?")
        .bind(&snapshot.actor_id)
        .execute(pool)
        .await
        .map_err(|e| Error::DatabaseError(e.to_string()))?;
    for theme_id in &snapshot.unlocked_themes {
        sqlx::query("INSERT OR IGNORE INTO unlocked_themes (actor_id, theme_id) VALUES (?, ?)")
            .bind(&snapshot.actor_id)
            .bind(theme_id)
            .execute(pool)
            .await
            .map_err(|e| Error::DatabaseError(e.to_string()))?;
    }

    Ok(())
}

/// Load the snapshot for an actor, if one exists
pub async fn load_snapshot(pool: &SqlitePool, actor_id: &str) -> Result<Option<PlayerSnapshot>> {
    let row: Option<PlayerRow> = sqlx::query_as(
        r#"
        SELECT actor_id, name, email, level, current_xp, xp_to_next_level,
               strength, agility, stamina, streak_days, balance, active_theme,
               updated_at
        FROM players
        WHERE actor_id = ?
        "#,
    )
    .bind(actor_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    let row = match row {
        Some(row) => row,
        None => return Ok(None),
    };

    let owned: Vec<(i64,)> =
        sqlx::query_as("SELECT item_id FROM owned_items WHERE actor_id = ?")
            .bind(actor_id)
            .fetch_all(pool)
            .await
            .map_err(|e| Error::DatabaseError(e.to_string()))?;
    let owned_items: BTreeSet<u32> = owned.into_iter().map(|(id,)| id as u32).collect();

    let themes: Vec<(String,)> =
        sqlx::query_as("SELECT theme_id FROM unlocked_themes WHERE actor_id = ?")
            .bind(actor_id)
            .fetch_all(pool)
            .await
            .map_err(|e| Error::DatabaseError(e.to_string()))?;
    let unlocked_themes: BTreeSet<String> = themes.into_iter().map(|(t,)| t).collect();

    Ok(Some(row.into_snapshot(owned_items, unlocked_themes)))
}

/// List every stored actor id, most recently updated first
pub async fn list_actors(pool: &SqlitePool) -> Result<Vec<String>> {
    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT actor_id FROM players ORDER BY updated_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(rows.into_iter().map(|(id,)| id).collect())
}

/// Delete an actor's snapshot and everything hanging off it (logout)
pub async fn delete_snapshot(pool: &SqlitePool, actor_id: &str) -> Result<()> {
    for table in ["owned_items", "unlocked_themes", "pets", "workouts"] {
        sqlx::query(&format!("DELETE FROM {} WHERE actor_id = ?", table))
            .bind(actor_id)
            .execute(pool)
            .await
            .map_err(|e| Error::DatabaseError(e.to_string()))?;
    }

    sqlx::query("DELETE FROM players WHERE actor_id = ?")
        .bind(actor_id)
        .execute(pool)
        .await
        .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(())
}
