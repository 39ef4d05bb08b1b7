//! Admin banner management

use axum::extract::{Json, Path, State};
use shared::error::{AppError, ErrorCode};

use crate::api::{ApiResult, internal};
use crate::db;
use crate::db::banners::BannerData;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<db::banners::BannerRow>> {
    let banners = db::banners::list_all(&state.pool).await.map_err(internal)?;
    Ok(Json(banners))
}

pub async fn create(
    State(state): State<AppState>,
    Json(data): Json<BannerData>,
) -> ApiResult<serde_json::Value> {
    if data.image_url.trim().is_empty() {
        return Err(AppError::validation("image_url is required"));
    }
    let now = shared::util::now_millis();
    let id = db::banners::create(&state.pool, &data, now)
        .await
        .map_err(internal)?;
    Ok(Json(serde_json::json!({ "id": id })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<BannerData>,
) -> ApiResult<serde_json::Value> {
    let updated = db::banners::update(&state.pool, id, &data)
        .await
        .map_err(internal)?;
    if !updated {
        return Err(AppError::new(ErrorCode::BannerNotFound));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    let deleted = db::banners::delete(&state.pool, id)
        .await
        .map_err(internal)?;
    if !deleted {
        return Err(AppError::new(ErrorCode::BannerNotFound));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
