//! Dashboard aggregation endpoint

use axum::extract::{Json, State};
use shared::error::{AppError, ErrorCode};

use crate::api::ApiResult;
use crate::db;
use crate::state::AppState;

pub async fn dashboard(State(state): State<AppState>) -> ApiResult<db::stats::DashboardStats> {
    let now = shared::util::now_millis();
    let stats = db::stats::dashboard(&state.pool, now).await.map_err(|e| {
        tracing::error!(error = %e, "stats aggregation failed");
        AppError::new(ErrorCode::InternalError)
    })?;
    Ok(Json(stats))
}
