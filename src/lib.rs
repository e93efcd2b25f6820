//! Coinbot - Crypto Price Chat Bot
//! Built with Domain-Driven Design principles

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export main types for convenience
pub use application::{Bot, CommandRouter};
pub use domain::directory::DirectoryCache;
pub use domain::quote::PriceLookupService;
pub use domain::rate_limit::RateLimiter;
pub use infrastructure::chat::ConsoleGateway;
pub use infrastructure::market_api::CoinMarketCapClient;
