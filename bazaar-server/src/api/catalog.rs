//! Public storefront reads: products, categories, payment methods, banners,
//! settings

use std::collections::HashMap;

use axum::extract::{Json, Path, Query, State};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};

use crate::db;
use crate::state::AppState;

use super::{ApiResult, internal};

#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// Filter on category display name (not slug)
    pub category: Option<String>,
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> ApiResult<Vec<db::products::ProductRow>> {
    let products = db::products::list(&state.pool, query.category.as_deref())
        .await
        .map_err(internal)?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<db::products::ProductRow> {
    let product = db::products::get(&state.pool, id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;
    Ok(Json(product))
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Vec<db::categories::CategoryRow>> {
    let categories = db::categories::list(&state.pool).await.map_err(internal)?;
    Ok(Json(categories))
}

/// Active methods only, without gateway credentials.
pub async fn list_payment_methods(
    State(state): State<AppState>,
) -> ApiResult<Vec<db::payment_methods::PublicPaymentMethod>> {
    let methods = db::payment_methods::list_active(&state.pool)
        .await
        .map_err(internal)?;
    Ok(Json(methods))
}

pub async fn list_banners(
    State(state): State<AppState>,
) -> ApiResult<Vec<db::banners::BannerRow>> {
    let banners = db::banners::list_active(&state.pool)
        .await
        .map_err(internal)?;
    Ok(Json(banners))
}

/// Storefront settings from the in-process cache.
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<HashMap<String, String>> {
    Ok(Json(state.settings.snapshot().await))
}
