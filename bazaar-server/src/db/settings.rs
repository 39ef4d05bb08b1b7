//! Settings key/value storage

use std::collections::HashMap;

use sqlx::SqlitePool;

use super::BoxError;

pub async fn load_all(pool: &SqlitePool) -> Result<HashMap<String, String>, sqlx::Error> {
    let rows: Vec<(String, String)> = sqlx::query_as("SELECT key, value FROM settings")
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().collect())
}

/// Upsert each pair inside one transaction.
pub async fn upsert_many(
    pool: &SqlitePool,
    entries: &HashMap<String, String>,
) -> Result<(), BoxError> {
    let mut tx = pool.begin().await?;
    for (key, value) in entries {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(())
}
