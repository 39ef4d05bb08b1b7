//! User records (credential store)

use sqlx::SqlitePool;

use super::BoxError;

#[derive(Debug, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: i64,
}

/// Exact-match lookup; emails are compared as stored.
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<UserRow>, BoxError> {
    let user = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, password_hash, role, created_at FROM users WHERE email = ?1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Insert a user and return the new id. Callers inspect the raw error to
/// map unique violations on `email`.
pub async fn insert(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: &str,
    now: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO users (name, email, password_hash, role, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(now)
    .fetch_one(pool)
    .await
}
