//! Dashboard aggregation queries
//!
//! Everything is computed per call. Empty tables produce zeros and empty
//! arrays so the dashboard never sees nulls.

use serde::Serialize;
use sqlx::SqlitePool;

use super::BoxError;

const TREND_WINDOW_MILLIS: i64 = 30 * 24 * 60 * 60 * 1000;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct RecentOrder {
    pub id: i64,
    pub amount: f64,
    pub status: String,
    pub created_at: i64,
    pub user_name: String,
    pub product_title: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct TrendPoint {
    /// Calendar day, `YYYY-MM-DD`
    pub date: String,
    pub total: f64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct RecentUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: i64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CategorySlice {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct TopProduct {
    pub title: String,
    pub sales_count: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub revenue: f64,
    pub orders: i64,
    pub users: i64,
    pub products: i64,
    pub recent_orders: Vec<RecentOrder>,
    pub sales_trend: Vec<TrendPoint>,
    pub recent_users: Vec<RecentUser>,
    pub category_distribution: Vec<CategorySlice>,
    pub top_products: Vec<TopProduct>,
}

pub async fn dashboard(pool: &SqlitePool, now: i64) -> Result<DashboardStats, BoxError> {
    // Revenue counts completed orders only; the other counters are totals.
    let revenue: f64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0.0) FROM orders WHERE status = 'completed'")
            .fetch_one(pool)
            .await?;
    let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await?;
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    let recent_orders = sqlx::query_as::<_, RecentOrder>(
        r#"
        SELECT o.id, o.amount, o.status, o.created_at,
               u.name AS user_name, p.title AS product_title
        FROM orders o
        JOIN users u ON o.user_id = u.id
        JOIN products p ON o.product_id = p.id
        ORDER BY o.created_at DESC, o.id DESC
        LIMIT 10
        "#,
    )
    .fetch_all(pool)
    .await?;

    // Daily revenue buckets over the last 30 days; days without sales are
    // simply absent.
    let cutoff = now - TREND_WINDOW_MILLIS;
    let sales_trend = sqlx::query_as::<_, TrendPoint>(
        r#"
        SELECT strftime('%Y-%m-%d', created_at / 1000, 'unixepoch') AS date,
               SUM(amount) AS total
        FROM orders
        WHERE status = 'completed' AND created_at >= ?1
        GROUP BY date
        ORDER BY date ASC
        "#,
    )
    .bind(cutoff)
    .fetch_all(pool)
    .await?;

    let recent_users = sqlx::query_as::<_, RecentUser>(
        r#"
        SELECT id, name, email, created_at
        FROM users
        ORDER BY created_at DESC, id DESC
        LIMIT 5
        "#,
    )
    .fetch_all(pool)
    .await?;

    let category_distribution = sqlx::query_as::<_, CategorySlice>(
        r#"
        SELECT COALESCE(c.name, 'Uncategorized') AS name, COUNT(*) AS value
        FROM products p
        LEFT JOIN categories c ON p.category_id = c.id
        GROUP BY COALESCE(c.name, 'Uncategorized')
        ORDER BY value DESC, name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let top_products = sqlx::query_as::<_, TopProduct>(
        r#"
        SELECT title, sales_count
        FROM products
        ORDER BY sales_count DESC, id ASC
        LIMIT 5
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(DashboardStats {
        revenue,
        orders,
        users,
        products,
        recent_orders,
        sales_trend,
        recent_users,
        category_distribution,
        top_products,
    })
}
