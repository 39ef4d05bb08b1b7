//! Idempotent startup seeding
//!
//! Guarantees the service is usable on first boot: an admin account,
//! storefront defaults, base categories and the manual payment methods.
//! Demo catalog content is only seeded in development.

use shared::models::Role;
use sqlx::SqlitePool;

use super::{BoxError, categories, users};
use crate::config::Config;
use crate::util::hash_password;

pub async fn run(pool: &SqlitePool, config: &Config) -> Result<(), BoxError> {
    seed_admin(pool, config).await?;
    seed_settings(pool).await?;
    seed_categories(pool).await?;
    seed_payment_methods(pool).await?;

    if config.environment == "development" {
        seed_demo_content(pool, &config.platform_name).await?;
    }
    Ok(())
}

async fn seed_admin(pool: &SqlitePool, config: &Config) -> Result<(), BoxError> {
    if users::find_by_email(pool, &config.admin_email).await?.is_some() {
        return Ok(());
    }
    let password_hash = hash_password(&config.admin_password)
        .map_err(|e| format!("admin password hashing failed: {e}"))?;
    users::insert(
        pool,
        "Admin",
        &config.admin_email,
        &password_hash,
        Role::Admin.as_str(),
        shared::util::now_millis(),
    )
    .await?;
    tracing::info!("Seeded admin account: {}", config.admin_email);
    Ok(())
}

async fn seed_settings(pool: &SqlitePool) -> Result<(), BoxError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM settings")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let defaults = [
        ("payment_mode", "manual"),
        ("currency", "USD"),
        ("currency_symbol", "$"),
        (
            "manual_payment_details",
            "Send the exact amount to the listed account and submit the transaction ID.",
        ),
        ("site_logo", ""),
        ("site_favicon", ""),
    ];
    for (key, value) in defaults {
        sqlx::query("INSERT INTO settings (key, value) VALUES (?1, ?2)")
            .bind(key)
            .bind(value)
            .execute(pool)
            .await?;
    }
    Ok(())
}

async fn seed_categories(pool: &SqlitePool) -> Result<(), BoxError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let now = shared::util::now_millis();
    let defaults = [
        ("Themes", "themes"),
        ("Scripts", "scripts"),
        ("Assets", "assets"),
        ("Graphics", "graphics"),
        ("Plugins", "plugins"),
    ];
    for (name, slug) in defaults {
        categories::create(
            pool,
            &categories::CategoryData {
                name: name.to_string(),
                slug: slug.to_string(),
                icon: None,
            },
            now,
        )
        .await?;
    }
    Ok(())
}

async fn seed_payment_methods(pool: &SqlitePool) -> Result<(), BoxError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payment_methods")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let defaults = [
        ("bkash", "bKash", "01700000000"),
        ("nagad", "Nagad", "01700000000"),
        ("rocket", "Rocket", "01700000000"),
    ];
    for (id, name, account) in defaults {
        sqlx::query(
            r#"
            INSERT INTO payment_methods (id, name, type, account_number, instructions, active)
            VALUES (?1, ?2, 'manual', ?3, 'Send money and submit the transaction ID.', 1)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(account)
        .execute(pool)
        .await?;
    }
    Ok(())
}

async fn category_id(pool: &SqlitePool, slug: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT id FROM categories WHERE slug = ?1")
        .bind(slug)
        .fetch_one(pool)
        .await
}

async fn seed_demo_content(pool: &SqlitePool, platform_name: &str) -> Result<(), BoxError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let now = shared::util::now_millis();
    sqlx::query(
        r#"
        INSERT INTO banners (image_url, title, subtitle, active, created_at)
        VALUES ('/img/banner-launch.jpg', 'Launch Sale', 'Premium digital goods, instant download', 1, ?1)
        "#,
    )
    .bind(now)
    .execute(pool)
    .await?;

    let demo = [
        ("Nova Admin Theme", 49.0, "themes"),
        ("Mailer Script Pro", 29.0, "scripts"),
        ("Icon Pack Vol. 1", 15.0, "graphics"),
        ("SEO Toolkit Plugin", 35.0, "plugins"),
    ];
    for (title, price, slug) in demo {
        let cid = category_id(pool, slug).await?;
        sqlx::query(
            r#"
            INSERT INTO products (title, description, price, thumbnail, file_url,
                                  author_name, category_id, created_at)
            VALUES (?1, 'Demo product', ?2, '/img/placeholder.png', '/files/demo.zip', ?3, ?4, ?5)
            "#,
        )
        .bind(title)
        .bind(price)
        .bind(platform_name)
        .bind(cid)
        .bind(now)
        .execute(pool)
        .await?;
    }
    Ok(())
}
