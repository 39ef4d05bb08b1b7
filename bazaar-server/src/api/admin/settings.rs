//! Admin settings updates

use std::collections::HashMap;

use axum::extract::{Json, State};

use crate::api::{ApiResult, internal};
use crate::db;
use crate::state::AppState;

/// Upsert the submitted pairs, then refresh the in-process cache so the
/// storefront sees the new values immediately.
pub async fn update(
    State(state): State<AppState>,
    Json(entries): Json<HashMap<String, String>>,
) -> ApiResult<serde_json::Value> {
    db::settings::upsert_many(&state.pool, &entries)
        .await
        .map_err(internal)?;
    state
        .settings
        .reload(&state.pool)
        .await
        .map_err(|e| internal(Box::new(e)))?;
    Ok(Json(serde_json::json!({ "success": true })))
}
