//! HTTP API routes

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod health;

use axum::routing::{get, post};
use axum::{Router, middleware};
use shared::error::{AppError, ErrorCode};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::auth_middleware;
use crate::state::AppState;

pub type ApiResult<T> = Result<axum::Json<T>, AppError>;

/// Log-and-mask helper for unexpected persistence errors.
pub(crate) fn internal(e: crate::db::BoxError) -> AppError {
    tracing::error!(error = %e, "database error");
    AppError::new(ErrorCode::InternalError)
}

pub fn create_router(state: AppState) -> Router {
    // Storefront reads and registration/login, no session required
    let public = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/products", get(catalog::list_products))
        .route("/api/products/{id}", get(catalog::get_product))
        .route("/api/categories", get(catalog::list_categories))
        .route("/api/payment-methods", get(catalog::list_payment_methods))
        .route("/api/banners", get(catalog::list_banners))
        .route("/api/settings", get(catalog::get_settings));

    // Buyer routes, session required
    let user = Router::new()
        .route("/api/checkout", post(checkout::checkout))
        .route("/api/user/orders", get(checkout::list_my_orders))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(public)
        .merge(user)
        .merge(admin::router(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
