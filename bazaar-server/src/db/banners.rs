//! Homepage banner queries

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::BoxError;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct BannerRow {
    pub id: i64,
    pub image_url: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub link: Option<String>,
    pub active: i64,
    pub created_at: i64,
}

#[derive(Debug, Deserialize)]
pub struct BannerData {
    pub image_url: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub link: Option<String>,
    pub active: bool,
}

pub async fn list_active(pool: &SqlitePool) -> Result<Vec<BannerRow>, BoxError> {
    let banners = sqlx::query_as::<_, BannerRow>(
        r#"
        SELECT id, image_url, title, subtitle, link, active, created_at
        FROM banners
        WHERE active = 1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(banners)
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<BannerRow>, BoxError> {
    let banners = sqlx::query_as::<_, BannerRow>(
        r#"
        SELECT id, image_url, title, subtitle, link, active, created_at
        FROM banners
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(banners)
}

pub async fn create(pool: &SqlitePool, data: &BannerData, now: i64) -> Result<i64, BoxError> {
    let id = sqlx::query_scalar(
        r#"
        INSERT INTO banners (image_url, title, subtitle, link, active, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING id
        "#,
    )
    .bind(&data.image_url)
    .bind(&data.title)
    .bind(&data.subtitle)
    .bind(&data.link)
    .bind(data.active as i64)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update(pool: &SqlitePool, id: i64, data: &BannerData) -> Result<bool, BoxError> {
    let result = sqlx::query(
        r#"
        UPDATE banners
        SET image_url = ?1, title = ?2, subtitle = ?3, link = ?4, active = ?5
        WHERE id = ?6
        "#,
    )
    .bind(&data.image_url)
    .bind(&data.title)
    .bind(&data.subtitle)
    .bind(&data.link)
    .bind(data.active as i64)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, BoxError> {
    let result = sqlx::query("DELETE FROM banners WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
