//! Product catalog queries

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::BoxError;

/// Product joined with its category's display name. `category_name` is None
/// for uncategorized products, including products whose category was deleted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub file_url: Option<String>,
    pub demo_url: Option<String>,
    pub author_name: Option<String>,
    pub category_id: Option<i64>,
    pub sales_count: i64,
    pub created_at: i64,
    pub category_name: Option<String>,
}

/// Fields accepted on create and full-overwrite update.
#[derive(Debug, Deserialize)]
pub struct ProductData {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub file_url: Option<String>,
    pub demo_url: Option<String>,
    pub author_name: Option<String>,
    pub category_id: Option<i64>,
}

const SELECT_JOINED: &str = r#"
    SELECT p.id, p.title, p.description, p.price, p.thumbnail, p.file_url,
           p.demo_url, p.author_name, p.category_id, p.sales_count,
           p.created_at, c.name AS category_name
    FROM products p
    LEFT JOIN categories c ON p.category_id = c.id
"#;

/// List products, newest first, optionally filtered by category display name.
pub async fn list(
    pool: &SqlitePool,
    category_name: Option<&str>,
) -> Result<Vec<ProductRow>, BoxError> {
    let products = match category_name {
        Some(name) => {
            let sql = format!("{SELECT_JOINED} WHERE c.name = ?1 ORDER BY p.created_at DESC, p.id DESC");
            sqlx::query_as::<_, ProductRow>(&sql)
                .bind(name)
                .fetch_all(pool)
                .await?
        }
        None => {
            let sql = format!("{SELECT_JOINED} ORDER BY p.created_at DESC, p.id DESC");
            sqlx::query_as::<_, ProductRow>(&sql).fetch_all(pool).await?
        }
    };
    Ok(products)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<ProductRow>, BoxError> {
    let sql = format!("{SELECT_JOINED} WHERE p.id = ?1");
    let product = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(product)
}

pub async fn create(
    pool: &SqlitePool,
    data: &ProductData,
    default_author: &str,
    now: i64,
) -> Result<i64, BoxError> {
    let author = data.author_name.as_deref().unwrap_or(default_author);
    let id = sqlx::query_scalar(
        r#"
        INSERT INTO products (title, description, price, thumbnail, file_url,
                              demo_url, author_name, category_id, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        RETURNING id
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.price)
    .bind(&data.thumbnail)
    .bind(&data.file_url)
    .bind(&data.demo_url)
    .bind(author)
    .bind(data.category_id)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Full-field overwrite; `sales_count` and `created_at` are never
/// client-writable. Returns false when the product does not exist.
pub async fn update(pool: &SqlitePool, id: i64, data: &ProductData) -> Result<bool, BoxError> {
    let result = sqlx::query(
        r#"
        UPDATE products
        SET title = ?1, description = ?2, price = ?3, thumbnail = ?4,
            file_url = ?5, demo_url = ?6, author_name = ?7, category_id = ?8
        WHERE id = ?9
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.price)
    .bind(&data.thumbnail)
    .bind(&data.file_url)
    .bind(&data.demo_url)
    .bind(&data.author_name)
    .bind(data.category_id)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete a product. Fails with a foreign key violation when orders
/// reference it; the handler maps that to a conflict.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
