//! Key-value app settings

use fitquest_core::{Error, Result};
use sqlx::SqlitePool;

pub const SETTING_ACTIVE_THEME: &str = "active_theme";

/// Read a setting value
pub async fn get_setting(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let row: Option<(String,)> = sqlx::query_as("SELECT value FROM settings WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(row.map(|(v,)| v))
}

/// Write a setting value
pub async fn set_setting(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    sqlx::query("INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)")
        .bind(key)
        .bind(value)
        .execute(pool)
        .await
        .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::Database;

    #[tokio::test]
    async fn test_setting_roundtrip() {
        let db = Database::connect_in_memory().await.unwrap();

        assert!(get_setting(db.pool(), SETTING_ACTIVE_THEME).await.unwrap().is_none());
        set_setting(db.pool(), SETTING_ACTIVE_THEME, "neon").await.unwrap();
        assert_eq!(
            get_setting(db.pool(), SETTING_ACTIVE_THEME).await.unwrap().as_deref(),
            Some("neon")
        );

        set_setting(db.pool(), SETTING_ACTIVE_THEME, "golden").await.unwrap();
        assert_eq!(
            get_setting(db.pool(), SETTING_ACTIVE_THEME).await.unwrap().as_deref(),
            Some("golden")
        );
    }
}
