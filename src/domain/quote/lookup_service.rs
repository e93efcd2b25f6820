//! Сервис котировок: resolve -> admission -> fetch

use std::sync::Arc;

use tracing::{info, warn};

use super::PriceQuote;
use crate::domain::directory::DirectoryCache;
use crate::domain::rate_limit::RateLimiter;
use crate::infrastructure::market_api::MarketApiClient;
use crate::shared::errors::LookupError;

/// Resolves a symbol and fetches its ticker data, subject to the local
/// rate limiter.
pub struct PriceLookupService {
    directory: Arc<DirectoryCache>,
    rate_limiter: Arc<RateLimiter>,
    api: Arc<dyn MarketApiClient>,
}

impl PriceLookupService {
    pub fn new(
        directory: Arc<DirectoryCache>,
        rate_limiter: Arc<RateLimiter>,
        api: Arc<dyn MarketApiClient>,
    ) -> Self {
        Self {
            directory,
            rate_limiter,
            api,
        }
    }

    /// Получить котировку по пользовательскому символу.
    ///
    /// Ровно один исходящий запрос на успешном пути, ноль при ранних
    /// отказах (resolve или admission).
    pub async fn lookup(&self, symbol: &str) -> Result<PriceQuote, LookupError> {
        let id = self.directory.resolve(symbol).await?;

        if !self.rate_limiter.is_within_limit() {
            warn!("⚠️ Rate limit hit, rejecting lookup for {}", symbol);
            return Err(LookupError::RateLimited);
        }
        self.rate_limiter.record();

        let ticker = self
            .api
            .fetch_ticker(id)
            .await
            .map_err(|e| LookupError::FetchFailed(e.to_string()))?;

        info!("🔍 Ticker fetched: {} ({})", ticker.name, ticker.symbol);

        Ok(PriceQuote {
            rank: ticker.rank,
            name: ticker.name,
            symbol: ticker.symbol,
            price_usd: ticker.quotes.usd.price,
            percent_change_24h: ticker.quotes.usd.percent_change_24h,
        })
    }
}
