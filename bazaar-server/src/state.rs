//! Shared application state

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;
use crate::settings::SettingsCache;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    /// SQLite pool (WAL, foreign keys enforced)
    pub pool: SqlitePool,
    /// JWT signing secret for session tokens
    pub jwt_secret: String,
    /// Platform display name, used as the default product author
    pub platform_name: String,
    /// Storefront settings, cached in-process and refreshed on admin writes
    pub settings: SettingsCache,
}

impl AppState {
    /// Full startup path: connect, migrate, seed, warm the settings cache.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database_url).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        db::seed::run(&pool, config).await?;

        let settings = SettingsCache::new();
        settings.reload(&pool).await?;

        Ok(Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
            platform_name: config.platform_name.clone(),
            settings,
        })
    }

    /// State over an already-prepared pool. Skips seeding; integration tests
    /// build their own fixtures.
    pub fn with_pool(pool: SqlitePool, jwt_secret: &str, platform_name: &str) -> Self {
        Self {
            pool,
            jwt_secret: jwt_secret.to_string(),
            platform_name: platform_name.to_string(),
            settings: SettingsCache::new(),
        }
    }
}
