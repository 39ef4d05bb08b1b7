//! Admin product management

use axum::extract::{Json, Path, State};
use shared::error::{AppError, ErrorCode};

use crate::api::{ApiResult, internal};
use crate::db;
use crate::db::products::ProductData;
use crate::state::AppState;

fn validate(data: &ProductData) -> Result<(), AppError> {
    if data.title.trim().is_empty() {
        return Err(AppError::validation("title is required"));
    }
    if !(data.price > 0.0) {
        return Err(AppError::new(ErrorCode::ProductInvalidPrice));
    }
    Ok(())
}

pub async fn create(
    State(state): State<AppState>,
    Json(data): Json<ProductData>,
) -> ApiResult<serde_json::Value> {
    validate(&data)?;
    let now = shared::util::now_millis();
    let id = db::products::create(&state.pool, &data, &state.platform_name, now)
        .await
        .map_err(internal)?;
    Ok(Json(serde_json::json!({ "id": id })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<ProductData>,
) -> ApiResult<serde_json::Value> {
    validate(&data)?;
    let updated = db::products::update(&state.pool, id, &data)
        .await
        .map_err(internal)?;
    if !updated {
        return Err(AppError::new(ErrorCode::ProductNotFound));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    let deleted = match db::products::delete(&state.pool, id).await {
        Ok(deleted) => deleted,
        // Purchased products stay: order history needs the file_url
        Err(e) if e.as_database_error().is_some_and(|d| d.is_foreign_key_violation()) => {
            return Err(AppError::new(ErrorCode::ProductHasOrders));
        }
        Err(e) => return Err(internal(e.into())),
    };
    if !deleted {
        return Err(AppError::new(ErrorCode::ProductNotFound));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
