//! Кэш каталога листингов: символ -> идентификатор актива

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use super::{DirectoryEntry, DirectorySnapshot};
use crate::infrastructure::market_api::MarketApiClient;
use crate::shared::errors::LookupError;

/// Holds the most recently fetched listings directory.
///
/// The snapshot is replaced wholesale on refresh, so concurrent readers
/// never observe a partially written directory.
pub struct DirectoryCache {
    api: Arc<dyn MarketApiClient>,
    snapshot: RwLock<Option<DirectorySnapshot>>,
}

impl DirectoryCache {
    pub fn new(api: Arc<dyn MarketApiClient>) -> Self {
        Self {
            api,
            snapshot: RwLock::new(None),
        }
    }

    /// Перезагрузить каталог целиком из market API
    pub async fn refresh(&self) -> Result<()> {
        let entries = self.api.fetch_listings().await?;
        info!("✅ Listings directory refreshed: {} entries", entries.len());

        let mut guard = self.snapshot.write().await;
        *guard = Some(DirectorySnapshot {
            entries,
            refreshed_at: Utc::now(),
        });

        Ok(())
    }

    /// Resolve a user-supplied symbol to the provider identifier.
    ///
    /// Case-insensitive scan in arrival order, first match wins.
    pub async fn resolve(&self, symbol: &str) -> Result<u64, LookupError> {
        if symbol.is_empty() {
            return Err(LookupError::EmptySymbol);
        }

        let guard = self.snapshot.read().await;
        let snapshot = guard.as_ref().ok_or(LookupError::CacheNotReady)?;

        for entry in &snapshot.entries {
            if entry.symbol.eq_ignore_ascii_case(symbol) {
                return Ok(entry.id);
            }
        }

        Err(LookupError::NotFound(symbol.to_string()))
    }

    /// Загружен ли каталог хотя бы один раз
    pub async fn is_ready(&self) -> bool {
        self.snapshot.read().await.is_some()
    }
}
