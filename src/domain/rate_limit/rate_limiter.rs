//! Счётчик исходящих запросов со скользящим окном

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

/// Soft rate limiter over a fixed time window.
///
/// `is_within_limit` and `record` are two separate steps. Concurrent
/// tasks may both pass the check before either records, so transient
/// bursts above the limit are possible. This is an advisory limiter,
/// not a hard quota.
pub struct RateLimiter {
    limit: u32,
    timespan: Duration,
    count: Arc<AtomicU32>,
}

impl RateLimiter {
    pub fn new(limit: u32, timespan: Duration) -> Self {
        Self {
            limit,
            timespan,
            count: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Admission check: does the current window still have capacity?
    pub fn is_within_limit(&self) -> bool {
        self.count.load(Ordering::SeqCst) < self.limit
    }

    /// Record one outbound call.
    ///
    /// Первый вызов в окне взводит одноразовый таймер, который обнуляет
    /// счётчик по истечении `timespan`.
    pub fn record(&self) {
        let prev = self.count.fetch_add(1, Ordering::SeqCst);
        if prev == 0 {
            let count = Arc::clone(&self.count);
            let timespan = self.timespan;
            tokio::spawn(async move {
                tokio::time::sleep(timespan).await;
                count.store(0, Ordering::SeqCst);
                debug!("rate window reset");
            });
        }
    }
}
