//! Category queries

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::BoxError;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Deserialize)]
pub struct CategoryData {
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<CategoryRow>, BoxError> {
    let categories = sqlx::query_as::<_, CategoryRow>(
        "SELECT id, name, slug, icon, created_at FROM categories ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

/// Insert a category. Callers inspect the raw error to map unique
/// violations on `name`/`slug`.
pub async fn create(
    pool: &SqlitePool,
    data: &CategoryData,
    now: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO categories (name, slug, icon, created_at) VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.slug)
    .bind(&data.icon)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &SqlitePool, id: i64, data: &CategoryData) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE categories SET name = ?1, slug = ?2, icon = ?3 WHERE id = ?4")
        .bind(&data.name)
        .bind(&data.slug)
        .bind(&data.icon)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete a category; referencing products fall back to uncategorized via
/// `ON DELETE SET NULL`.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, BoxError> {
    let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
