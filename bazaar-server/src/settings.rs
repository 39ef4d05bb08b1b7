//! Storefront settings cache
//!
//! Settings live in a flat key/value table written only by admins. The cache
//! keeps a read copy in-process; admin writes hit the table first and then
//! call `reload`, so handlers never observe a half-written state.

use std::collections::HashMap;
use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::RwLock;

use crate::db;

/// Key selecting the storefront-wide payment flow ("manual" or "auto").
pub const PAYMENT_MODE: &str = "payment_mode";

#[derive(Clone, Default)]
pub struct SettingsCache {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl SettingsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached map with the current table contents.
    pub async fn reload(&self, pool: &SqlitePool) -> Result<(), sqlx::Error> {
        let map = db::settings::load_all(pool).await?;
        let mut guard = self.inner.write().await;
        *guard = map;
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.inner.read().await.get(key).cloned()
    }

    /// Full copy of the cached settings, as served to the storefront.
    pub async fn snapshot(&self) -> HashMap<String, String> {
        self.inner.read().await.clone()
    }

    /// Storefront payment mode; "manual" when unset.
    pub async fn payment_mode(&self) -> String {
        self.get(PAYMENT_MODE)
            .await
            .unwrap_or_else(|| "manual".to_string())
    }
}
