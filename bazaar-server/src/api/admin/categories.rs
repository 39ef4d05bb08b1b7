//! Admin category management

use axum::extract::{Json, Path, State};
use shared::error::{AppError, ErrorCode};

use crate::api::{ApiResult, internal};
use crate::db;
use crate::db::categories::CategoryData;
use crate::state::AppState;

fn validate(data: &CategoryData) -> Result<(), AppError> {
    if data.name.trim().is_empty() || data.slug.trim().is_empty() {
        return Err(AppError::validation("name and slug are required"));
    }
    Ok(())
}

pub async fn create(
    State(state): State<AppState>,
    Json(data): Json<CategoryData>,
) -> ApiResult<serde_json::Value> {
    validate(&data)?;
    let now = shared::util::now_millis();
    let id = match db::categories::create(&state.pool, &data, now).await {
        Ok(id) => id,
        Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
            return Err(AppError::new(ErrorCode::CategoryNameExists));
        }
        Err(e) => return Err(internal(e.into())),
    };
    Ok(Json(serde_json::json!({ "id": id })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<CategoryData>,
) -> ApiResult<serde_json::Value> {
    validate(&data)?;
    let updated = match db::categories::update(&state.pool, id, &data).await {
        Ok(updated) => updated,
        Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
            return Err(AppError::new(ErrorCode::CategoryNameExists));
        }
        Err(e) => return Err(internal(e.into())),
    };
    if !updated {
        return Err(AppError::new(ErrorCode::CategoryNotFound));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}

/// Products in the deleted category become uncategorized, not deleted.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    let deleted = db::categories::delete(&state.pool, id)
        .await
        .map_err(internal)?;
    if !deleted {
        return Err(AppError::new(ErrorCode::CategoryNotFound));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
