//! Admin console endpoints
//!
//! Every route here is layered behind `auth_middleware` + `require_admin`.

mod banners;
mod categories;
mod orders;
mod payment_methods;
mod products;
mod settings;
mod stats;

use axum::routing::{get, post, put};
use axum::{Router, middleware};

use crate::auth::{auth_middleware, require_admin};
use crate::state::AppState;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        // Product mutations live on the public catalog path
        .route("/api/products", post(products::create))
        .route(
            "/api/products/{id}",
            put(products::update).delete(products::remove),
        )
        .route("/api/admin/orders", get(orders::list))
        .route("/api/admin/orders/{id}/status", put(orders::set_status))
        .route("/api/admin/stats", get(stats::dashboard))
        .route("/api/admin/settings", put(settings::update))
        .route("/api/admin/categories", post(categories::create))
        .route(
            "/api/admin/categories/{id}",
            put(categories::update).delete(categories::remove),
        )
        .route(
            "/api/admin/banners",
            get(banners::list).post(banners::create),
        )
        .route(
            "/api/admin/banners/{id}",
            put(banners::update).delete(banners::remove),
        )
        .route("/api/admin/payment-methods", get(payment_methods::list))
        .route("/api/admin/payment-methods/{id}", put(payment_methods::update))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}
