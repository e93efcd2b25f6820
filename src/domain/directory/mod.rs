//! Directory domain - symbol to market identifier mapping

mod directory_cache;

pub use directory_cache::DirectoryCache;

use chrono::{DateTime, Utc};

/// Single listing entry from the market API directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub symbol: String,
    pub id: u64,
}

/// Immutable snapshot of the listings directory
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
    pub entries: Vec<DirectoryEntry>,
    pub refreshed_at: DateTime<Utc>,
}
