//! CoinMarketCap v2 HTTP клиент

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use super::{MarketApiClient, TickerData};
use crate::domain::directory::DirectoryEntry;

/// Ответ эндпоинта /listings/
#[derive(Debug, Deserialize)]
struct ListingsResponse {
    data: Vec<ListingItem>,
}

#[derive(Debug, Deserialize)]
struct ListingItem {
    id: u64,
    symbol: String,
}

/// Ответ эндпоинта /ticker/{id}/
#[derive(Debug, Deserialize)]
struct TickerResponse {
    data: TickerData,
}

/// CoinMarketCap API клиент
pub struct CoinMarketCapClient {
    http_client: Client,
    base_url: String,
}

impl CoinMarketCapClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl MarketApiClient for CoinMarketCapClient {
    async fn fetch_listings(&self) -> Result<Vec<DirectoryEntry>> {
        let url = format!("{}/listings/", self.base_url);

        info!("🔍 Fetching listings directory from: {}", url);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "listings request failed with status: {}",
                response.status()
            ));
        }

        let listings: ListingsResponse = response.json().await?;

        Ok(listings
            .data
            .into_iter()
            .map(|item| DirectoryEntry {
                symbol: item.symbol,
                id: item.id,
            })
            .collect())
    }

    async fn fetch_ticker(&self, id: u64) -> Result<TickerData> {
        let url = format!("{}/ticker/{}/", self.base_url, id);

        info!("🔍 Fetching ticker data from: {}", url);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "ticker request failed with status: {}",
                response.status()
            ));
        }

        let ticker: TickerResponse = response.json().await?;

        Ok(ticker.data)
    }
}
