//! Market API clients - listings directory and per-asset ticker data

mod coinmarketcap;

pub use coinmarketcap::CoinMarketCapClient;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::directory::DirectoryEntry;

/// Данные тикера, возвращаемые market API для одного актива
#[derive(Debug, Clone, Deserialize)]
pub struct TickerData {
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    pub quotes: QuoteMap,
}

/// Котировки по валютам (сейчас только USD)
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteMap {
    #[serde(rename = "USD")]
    pub usd: UsdQuote,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsdQuote {
    pub price: f64,
    pub percent_change_24h: f64,
}

/// Базовый trait для клиентов market API
#[async_trait]
pub trait MarketApiClient: Send + Sync {
    /// Получить полный каталог листингов
    async fn fetch_listings(&self) -> Result<Vec<DirectoryEntry>>;

    /// Получить данные тикера по идентификатору актива
    async fn fetch_ticker(&self, id: u64) -> Result<TickerData>;
}
