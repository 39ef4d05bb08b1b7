//! Order persistence and the checkout transaction

use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::models::OrderStatus;
use sqlx::SqlitePool;

use super::BoxError;
use crate::error::{ServiceError, ServiceResult};

/// A buyer's order joined with the product fields needed for re-download.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct UserOrderRow {
    pub id: i64,
    pub product_id: i64,
    pub amount: f64,
    pub status: String,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub created_at: i64,
    pub title: String,
    pub thumbnail: Option<String>,
    pub file_url: Option<String>,
}

/// Admin view: order joined with buyer and product identity.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AdminOrderRow {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub amount: f64,
    pub status: String,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub created_at: i64,
    pub user_name: String,
    pub user_email: String,
    pub product_title: String,
}

/// Insert a completed order and bump the product's sales counter as one
/// unit. The INSERT runs first so the transaction takes the write lock
/// immediately; either both rows land or neither does.
pub async fn create_completed(
    pool: &SqlitePool,
    user_id: i64,
    product_id: i64,
    amount: f64,
    payment_method: &str,
    transaction_id: &str,
    now: i64,
) -> Result<i64, BoxError> {
    let mut tx = pool.begin().await?;

    let order_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO orders (user_id, product_id, amount, status, payment_method,
                            transaction_id, created_at)
        VALUES (?1, ?2, ?3, 'completed', ?4, ?5, ?6)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(product_id)
    .bind(amount)
    .bind(payment_method)
    .bind(transaction_id)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE products SET sales_count = sales_count + 1 WHERE id = ?1")
        .bind(product_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(order_id)
}

pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<UserOrderRow>, BoxError> {
    let orders = sqlx::query_as::<_, UserOrderRow>(
        r#"
        SELECT o.id, o.product_id, o.amount, o.status, o.payment_method,
               o.transaction_id, o.created_at, p.title, p.thumbnail, p.file_url
        FROM orders o
        JOIN products p ON o.product_id = p.id
        WHERE o.user_id = ?1
        ORDER BY o.created_at DESC, o.id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<AdminOrderRow>, BoxError> {
    let orders = sqlx::query_as::<_, AdminOrderRow>(
        r#"
        SELECT o.id, o.user_id, o.product_id, o.amount, o.status,
               o.payment_method, o.transaction_id, o.created_at,
               u.name AS user_name, u.email AS user_email,
               p.title AS product_title
        FROM orders o
        JOIN users u ON o.user_id = u.id
        JOIN products p ON o.product_id = p.id
        ORDER BY o.created_at DESC, o.id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

/// Overwrite an order's status. Any state can be set from any state; the
/// amount snapshot is never touched.
pub async fn set_status(
    pool: &SqlitePool,
    order_id: i64,
    status: OrderStatus,
) -> ServiceResult<()> {
    let result = sqlx::query("UPDATE orders SET status = ?1 WHERE id = ?2")
        .bind(status.as_str())
        .bind(order_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ServiceError::App(AppError::new(ErrorCode::OrderNotFound)));
    }
    Ok(())
}
