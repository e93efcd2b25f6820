//! Infrastructure layer - market API and chat platform adapters

pub mod chat;
pub mod market_api;
