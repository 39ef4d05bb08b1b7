//! Admin payment method management

use axum::extract::{Json, Path, State};
use shared::error::{AppError, ErrorCode};

use crate::api::{ApiResult, internal};
use crate::db;
use crate::db::payment_methods::PaymentMethodData;
use crate::state::AppState;

/// Full rows including gateway credentials; this surface is admin-only.
pub async fn list(
    State(state): State<AppState>,
) -> ApiResult<Vec<db::payment_methods::PaymentMethodRow>> {
    let methods = db::payment_methods::list_all(&state.pool)
        .await
        .map_err(internal)?;
    Ok(Json(methods))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<PaymentMethodData>,
) -> ApiResult<serde_json::Value> {
    let updated = db::payment_methods::update(&state.pool, &id, &data)
        .await
        .map_err(internal)?;
    if !updated {
        return Err(AppError::new(ErrorCode::PaymentMethodNotFound));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
