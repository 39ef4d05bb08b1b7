//! Admin console: aggregation, catalog management, settings, sanitization

mod common;

use common::*;
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn stats_on_empty_database_default_to_zero() {
    let app = spawn_app().await;

    // storage-level check before any user exists
    let stats = bazaar_server::db::stats::dashboard(&app.pool, shared::util::now_millis())
        .await
        .expect("stats");
    assert_eq!(stats.revenue, 0.0);
    assert_eq!(stats.orders, 0);
    assert_eq!(stats.users, 0);
    assert_eq!(stats.products, 0);
    assert!(stats.recent_orders.is_empty());
    assert!(stats.sales_trend.is_empty());
    assert!(stats.recent_users.is_empty());
    assert!(stats.category_distribution.is_empty());
    assert!(stats.top_products.is_empty());

    // same through the endpoint, with only the admin seeded
    let admin_token = seed_admin(&app).await;
    let (status, body) = get(&app.router, "/api/admin/stats", Some(&admin_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["revenue"], 0.0);
    assert_eq!(body["orders"], 0);
    assert_eq!(body["users"], 1);
    assert!(body["recent_orders"].as_array().expect("array").is_empty());
    assert!(body["sales_trend"].as_array().expect("array").is_empty());
}

#[tokio::test]
async fn stats_aggregate_completed_revenue_and_trend() {
    let app = spawn_app().await;
    let admin_token = seed_admin(&app).await;
    let product_id = insert_product(&app.pool, "Theme", 50.0, "/f.zip", None).await;
    let token = register_user(&app, "Ivy", "ivy@example.com", "pw12345").await;

    for i in 0..3 {
        let (status, _) = post(
            &app.router,
            "/api/checkout",
            Some(&token),
            json!({ "productId": product_id, "paymentMethod": "bkash", "transactionId": format!("T-{i}") }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    // an old order outside the 30-day window still counts toward revenue
    // but not the trend
    let old = shared::util::now_millis() - 40 * 24 * 60 * 60 * 1000;
    sqlx::query(
        r#"
        INSERT INTO orders (user_id, product_id, amount, status, created_at)
        VALUES (1, ?1, 50.0, 'completed', ?2)
        "#,
    )
    .bind(product_id)
    .bind(old)
    .execute(&app.pool)
    .await
    .expect("old order");

    // cancelled orders never count toward revenue
    sqlx::query(
        r#"
        INSERT INTO orders (user_id, product_id, amount, status, created_at)
        VALUES (1, ?1, 50.0, 'cancelled', ?2)
        "#,
    )
    .bind(product_id)
    .bind(shared::util::now_millis())
    .execute(&app.pool)
    .await
    .expect("cancelled order");

    let (status, body) = get(&app.router, "/api/admin/stats", Some(&admin_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["revenue"], 200.0);
    assert_eq!(body["orders"], 5);
    assert_eq!(body["products"], 1);

    let trend = body["sales_trend"].as_array().expect("trend");
    assert_eq!(trend.len(), 1, "only today's bucket: {trend:?}");
    assert_eq!(trend[0]["total"], 150.0);

    let top = body["top_products"].as_array().expect("top products");
    assert_eq!(top[0]["title"], "Theme");
    assert_eq!(top[0]["sales_count"], 3);
}

#[tokio::test]
async fn deleting_a_category_leaves_products_uncategorized() {
    let app = spawn_app().await;
    let admin_token = seed_admin(&app).await;

    let (status, body) = post(
        &app.router,
        "/api/admin/categories",
        Some(&admin_token),
        json!({ "name": "Themes", "slug": "themes" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let category_id = body["id"].as_i64().expect("category id");

    // duplicate name is a conflict
    let (status, body) = post(
        &app.router,
        "/api/admin/categories",
        Some(&admin_token),
        json!({ "name": "Themes", "slug": "themes-2" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 6102);

    let product_id =
        insert_product(&app.pool, "Dark Theme", 19.0, "/f.zip", Some(category_id)).await;

    // category filter matches on display name
    let (_, listed) = get(&app.router, "/api/products?category=Themes", None).await;
    assert_eq!(listed.as_array().expect("array").len(), 1);

    let (status, _) = request(
        &app.router,
        Method::DELETE,
        &format!("/api/admin/categories/{category_id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // the product survives, uncategorized
    let (status, product) = get(&app.router, &format!("/api/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(product["category_id"].is_null());
    assert!(product["category_name"].is_null());

    let (_, stats) = get(&app.router, "/api/admin/stats", Some(&admin_token)).await;
    let distribution = stats["category_distribution"].as_array().expect("array");
    assert_eq!(distribution.len(), 1);
    assert_eq!(distribution[0]["name"], "Uncategorized");
    assert_eq!(distribution[0]["value"], 1);
}

#[tokio::test]
async fn purchased_products_cannot_be_deleted() {
    let app = spawn_app().await;
    let admin_token = seed_admin(&app).await;
    let product_id = insert_product(&app.pool, "Keeper", 10.0, "/f.zip", None).await;
    let token = register_user(&app, "Jo", "jo@example.com", "pw12345").await;

    let (status, _) = post(
        &app.router,
        "/api/checkout",
        Some(&token),
        json!({ "productId": product_id, "paymentMethod": "bkash", "transactionId": "T-1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(
        &app.router,
        Method::DELETE,
        &format!("/api/products/{product_id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 6003);

    // the download link still resolves
    let (_, orders) = get(&app.router, "/api/user/orders", Some(&token)).await;
    assert_eq!(orders[0]["file_url"], "/f.zip");
}

#[tokio::test]
async fn product_validation_rejects_bad_prices() {
    let app = spawn_app().await;
    let admin_token = seed_admin(&app).await;

    for price in [0.0, -5.0] {
        let (status, body) = post(
            &app.router,
            "/api/products",
            Some(&admin_token),
            json!({ "title": "Freebie", "price": price }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 6002);
    }
}

#[tokio::test]
async fn public_payment_methods_omit_credentials() {
    let app = spawn_app().await;
    let admin_token = seed_admin(&app).await;
    sqlx::query(
        r#"
        INSERT INTO payment_methods (id, name, type, account_number, api_key, api_secret, active)
        VALUES ('gateway', 'Gateway', 'auto', NULL, 'pk_live_123', 'sk_live_456', 1),
               ('bkash', 'bKash', 'manual', '0170', NULL, NULL, 1),
               ('legacy', 'Legacy', 'manual', NULL, NULL, NULL, 0)
        "#,
    )
    .execute(&app.pool)
    .await
    .expect("seed methods");

    let (status, body) = get(&app.router, "/api/payment-methods", None).await;
    assert_eq!(status, StatusCode::OK);
    let methods = body.as_array().expect("array");
    // inactive methods are hidden from the storefront
    assert_eq!(methods.len(), 2);
    for method in methods {
        assert!(method.get("api_key").is_none(), "credential leaked: {method}");
        assert!(method.get("api_secret").is_none());
    }

    // the admin view keeps them
    let (_, body) = get(&app.router, "/api/admin/payment-methods", Some(&admin_token)).await;
    let gateway = body
        .as_array()
        .expect("array")
        .iter()
        .find(|m| m["id"] == "gateway")
        .expect("gateway row")
        .clone();
    assert_eq!(gateway["api_key"], "pk_live_123");
    assert_eq!(gateway["type"], "auto");
}

#[tokio::test]
async fn settings_updates_are_visible_immediately() {
    let app = spawn_app().await;
    let admin_token = seed_admin(&app).await;

    let (status, body) = get(&app.router, "/api/settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_object().expect("map").is_empty());

    let (status, _) = put(
        &app.router,
        "/api/admin/settings",
        Some(&admin_token),
        json!({ "payment_mode": "auto", "currency_symbol": "$" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app.router, "/api/settings", None).await;
    assert_eq!(body["payment_mode"], "auto");
    assert_eq!(body["currency_symbol"], "$");

    // writes are upserts
    let (status, _) = put(
        &app.router,
        "/api/admin/settings",
        Some(&admin_token),
        json!({ "payment_mode": "manual" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = get(&app.router, "/api/settings", None).await;
    assert_eq!(body["payment_mode"], "manual");
    assert_eq!(body["currency_symbol"], "$");
}

#[tokio::test]
async fn banner_lifecycle() {
    let app = spawn_app().await;
    let admin_token = seed_admin(&app).await;

    let (status, body) = post(
        &app.router,
        "/api/admin/banners",
        Some(&admin_token),
        json!({ "image_url": "/img/sale.jpg", "title": "Sale", "subtitle": null, "link": null, "active": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let banner_id = body["id"].as_i64().expect("banner id");

    let (_, banners) = get(&app.router, "/api/banners", None).await;
    assert_eq!(banners.as_array().expect("array").len(), 1);

    // deactivate: hidden from the storefront, visible to the console
    let (status, _) = put(
        &app.router,
        &format!("/api/admin/banners/{banner_id}"),
        Some(&admin_token),
        json!({ "image_url": "/img/sale.jpg", "title": "Sale", "subtitle": null, "link": null, "active": false }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, banners) = get(&app.router, "/api/banners", None).await;
    assert!(banners.as_array().expect("array").is_empty());
    let (_, banners) = get(&app.router, "/api/admin/banners", Some(&admin_token)).await;
    assert_eq!(banners.as_array().expect("array").len(), 1);

    let (status, _) = request(
        &app.router,
        Method::DELETE,
        &format!("/api/admin/banners/{banner_id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(
        &app.router,
        Method::DELETE,
        &format!("/api/admin/banners/{banner_id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6201);
}
