//! Checkout and buyer order history

use axum::Extension;
use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::PaymentMethodType;

use crate::auth::Identity;
use crate::db;
use crate::payment;
use crate::state::AppState;

use super::{ApiResult, internal};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub product_id: i64,
    pub payment_method: String,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order_id: i64,
    pub download_url: Option<String>,
}

pub async fn checkout(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<CheckoutRequest>,
) -> ApiResult<CheckoutResponse> {
    // The catalog price is authoritative; the client never sends an amount.
    let product = db::products::get(&state.pool, req.product_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;

    // `payment_method` is free text; ids not present in the table settle
    // per the storefront-wide payment mode (manual when unset).
    let method_type = match db::payment_methods::find(&state.pool, &req.payment_method)
        .await
        .map_err(internal)?
    {
        Some(method) => PaymentMethodType::from_db(&method.method_type),
        None => PaymentMethodType::from_db(&state.settings.payment_mode().await),
    };

    let gateway = payment::gateway_for(method_type);
    let transaction_id = gateway
        .charge(product.price, req.transaction_id.as_deref())
        .await?;

    let now = shared::util::now_millis();
    let order_id = db::orders::create_completed(
        &state.pool,
        identity.user_id,
        product.id,
        product.price,
        &req.payment_method,
        &transaction_id,
        now,
    )
    .await
    .map_err(|e| {
        tracing::error!(error = %e, product_id = product.id, "checkout transaction failed");
        AppError::new(ErrorCode::CheckoutFailed)
    })?;

    Ok(Json(CheckoutResponse {
        order_id,
        download_url: product.file_url,
    }))
}

pub async fn list_my_orders(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Vec<db::orders::UserOrderRow>> {
    let orders = db::orders::list_for_user(&state.pool, identity.user_id)
        .await
        .map_err(internal)?;
    Ok(Json(orders))
}
