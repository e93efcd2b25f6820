//! Error handling for the application

use thiserror::Error;

use crate::shared::config::LangCfg;

/// Lookup-related errors for the `price` command path
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("empty symbol")]
    EmptySymbol,

    #[error("listings directory not loaded yet")]
    CacheNotReady,

    #[error("unknown symbol: {0}")]
    NotFound(String),

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("market API request failed: {0}")]
    FetchFailed(String),
}

impl LookupError {
    /// Подобрать сообщение для пользователя из языкового конфига
    pub fn user_message<'a>(&self, lang: &'a LangCfg) -> &'a str {
        match self {
            LookupError::EmptySymbol => &lang.no_symbol,
            LookupError::CacheNotReady => &lang.no_listings,
            LookupError::NotFound(_) => &lang.invalid_symbol,
            LookupError::RateLimited => &lang.too_many_requests,
            LookupError::FetchFailed(_) => &lang.no_data,
        }
    }
}

/// Chat transport errors
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("failed to connect to chat platform: {0}")]
    Connect(String),

    #[error("failed to send message: {0}")]
    Send(String),
}
