//! Database access layer

pub mod banners;
pub mod categories;
pub mod orders;
pub mod payment_methods;
pub mod products;
pub mod seed;
pub mod settings;
pub mod stats;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Open the SQLite pool with the pragmas the service depends on: WAL so
/// readers keep going during checkout writes, a busy timeout so contended
/// writers wait instead of failing, and enforced foreign keys.
pub async fn connect(database_url: &str) -> Result<SqlitePool, BoxError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    Ok(pool)
}
