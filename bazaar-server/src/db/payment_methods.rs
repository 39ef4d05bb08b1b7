//! Payment method queries
//!
//! Two row shapes on purpose: the public one never carries gateway
//! credentials, so sanitization cannot be forgotten at the edge.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::BoxError;

/// Full row, admin console only.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct PaymentMethodRow {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub method_type: String,
    pub account_number: Option<String>,
    pub instructions: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub active: i64,
}

/// Storefront view: no credentials.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct PublicPaymentMethod {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub method_type: String,
    pub account_number: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PaymentMethodData {
    pub name: String,
    #[serde(rename = "type")]
    pub method_type: String,
    pub account_number: Option<String>,
    pub instructions: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub active: bool,
}

pub async fn list_active(pool: &SqlitePool) -> Result<Vec<PublicPaymentMethod>, BoxError> {
    let methods = sqlx::query_as::<_, PublicPaymentMethod>(
        r#"
        SELECT id, name, type, account_number, instructions
        FROM payment_methods
        WHERE active = 1
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(methods)
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<PaymentMethodRow>, BoxError> {
    let methods = sqlx::query_as::<_, PaymentMethodRow>(
        r#"
        SELECT id, name, type, account_number, instructions, api_key,
               api_secret, active
        FROM payment_methods
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(methods)
}

pub async fn find(pool: &SqlitePool, id: &str) -> Result<Option<PaymentMethodRow>, BoxError> {
    let method = sqlx::query_as::<_, PaymentMethodRow>(
        r#"
        SELECT id, name, type, account_number, instructions, api_key,
               api_secret, active
        FROM payment_methods
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(method)
}

pub async fn update(
    pool: &SqlitePool,
    id: &str,
    data: &PaymentMethodData,
) -> Result<bool, BoxError> {
    let result = sqlx::query(
        r#"
        UPDATE payment_methods
        SET name = ?1, type = ?2, account_number = ?3, instructions = ?4,
            api_key = ?5, api_secret = ?6, active = ?7
        WHERE id = ?8
        "#,
    )
    .bind(&data.name)
    .bind(&data.method_type)
    .bind(&data.account_number)
    .bind(&data.instructions)
    .bind(&data.api_key)
    .bind(&data.api_secret)
    .bind(data.active as i64)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
