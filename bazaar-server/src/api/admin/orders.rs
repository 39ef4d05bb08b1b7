//! Admin order management

use axum::extract::{Json, Path, State};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::OrderStatus;

use crate::api::{ApiResult, internal};
use crate::db;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<db::orders::AdminOrderRow>> {
    let orders = db::orders::list_all(&state.pool).await.map_err(internal)?;
    Ok(Json(orders))
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<StatusRequest>,
) -> ApiResult<serde_json::Value> {
    let status = OrderStatus::from_db(&req.status).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::InvalidOrderStatus,
            format!("unknown order status: {}", req.status),
        )
    })?;
    db::orders::set_status(&state.pool, id, status).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
