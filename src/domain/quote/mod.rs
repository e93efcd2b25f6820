//! Quote domain - price lookups against the market API

mod lookup_service;

pub use lookup_service::PriceLookupService;

/// Price data point for a single asset, built per request
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub percent_change_24h: f64,
}
