use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use coinbot::shared::config::Config;
use coinbot::{
    Bot, CoinMarketCapClient, CommandRouter, ConsoleGateway, DirectoryCache, PriceLookupService,
    RateLimiter,
};

#[derive(Parser, Debug)]
#[command(version, about = "Crypto price chat bot with CoinMarketCap lookups")]
struct Args {
    /// Path to config file
    #[arg(long, default_value = "Config.toml")]
    config: String,

    /// Command prefix override
    #[arg(long)]
    prefix: Option<String>,

    /// Rate limit override (calls per window)
    #[arg(long)]
    rate_limit: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut config = Config::from_file(&args.config)?;

    // CLI args have higher priority than the config file
    if let Some(prefix) = args.prefix {
        config.chat.command_prefix = prefix;
    }
    if let Some(limit) = args.rate_limit {
        config.rate_limiter.limit = limit;
    }

    let api = Arc::new(CoinMarketCapClient::new(config.api.base_url.clone()));
    let directory = Arc::new(DirectoryCache::new(api.clone()));
    let rate_limiter = Arc::new(RateLimiter::new(
        config.rate_limiter.limit,
        Duration::from_millis(config.rate_limiter.timespan_ms),
    ));
    let lookup = Arc::new(PriceLookupService::new(
        directory.clone(),
        rate_limiter,
        api,
    ));

    // Каталог грузится один раз на старте; при неудаче кэш остаётся
    // пустым и все price-команды отклоняются до перезапуска
    if let Err(e) = directory.refresh().await {
        error!("❌ Failed to refresh listings directory: {}", e);
    }

    let router = Arc::new(CommandRouter::new(
        config.chat.command_prefix.clone(),
        config.ui_colors,
        config.lang.clone(),
        lookup,
    ));

    let mut gateway = ConsoleGateway::new(config.chat.bot_token.clone());
    Bot::new(router).run(&mut gateway).await
}
