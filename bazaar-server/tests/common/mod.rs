//! Shared helpers for integration tests
//!
//! Each test gets its own temp-file SQLite database so pool connections see
//! the same data and concurrent writers behave like production.

use axum::Router;
use axum::body::Body;
use bazaar_server::{AppState, api, auth, db};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use shared::models::Role;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const JWT_SECRET: &str = "integration-test-secret";
pub const PLATFORM_NAME: &str = "Bazaar";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    // dropped last so the database file outlives the pool
    _db_file: tempfile::NamedTempFile,
}

pub async fn spawn_app() -> TestApp {
    let db_file = tempfile::NamedTempFile::new().expect("temp db file");
    let url = format!("sqlite:{}", db_file.path().display());
    let pool = db::connect(&url).await.expect("connect");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrate");

    let state = AppState::with_pool(pool.clone(), JWT_SECRET, PLATFORM_NAME);
    state.settings.reload(&pool).await.expect("settings cache");
    let router = api::create_router(state);

    TestApp {
        router,
        pool,
        _db_file: db_file,
    }
}

pub async fn request(
    router: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

pub async fn get(router: &Router, path: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
    request(router, Method::GET, path, token, None).await
}

pub async fn post(
    router: &Router,
    path: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    request(router, Method::POST, path, token, Some(body)).await
}

pub async fn put(
    router: &Router,
    path: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    request(router, Method::PUT, path, token, Some(body)).await
}

/// Register a buyer through the real endpoint and return their token.
pub async fn register_user(app: &TestApp, name: &str, email: &str, password: &str) -> String {
    let (status, body) = post(
        &app.router,
        "/api/auth/register",
        None,
        serde_json::json!({ "name": name, "email": email, "password": password }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    body["token"].as_str().expect("token").to_string()
}

/// Insert an admin row directly and mint a matching token.
pub async fn seed_admin(app: &TestApp) -> String {
    let hash = bazaar_server::util::hash_password("admin-pass").expect("hash");
    let id = db::users::insert(
        &app.pool,
        "Admin",
        "admin@test.local",
        &hash,
        Role::Admin.as_str(),
        shared::util::now_millis(),
    )
    .await
    .expect("insert admin");
    auth::create_token(id, "Admin", "admin@test.local", Role::Admin, JWT_SECRET).expect("token")
}

/// Insert a product via the storage layer and return its id.
pub async fn insert_product(
    pool: &SqlitePool,
    title: &str,
    price: f64,
    file_url: &str,
    category_id: Option<i64>,
) -> i64 {
    db::products::create(
        pool,
        &db::products::ProductData {
            title: title.to_string(),
            description: Some("test product".to_string()),
            price,
            thumbnail: None,
            file_url: Some(file_url.to_string()),
            demo_url: None,
            author_name: None,
            category_id,
        },
        PLATFORM_NAME,
        shared::util::now_millis(),
    )
    .await
    .expect("insert product")
}
