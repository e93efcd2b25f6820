//! Rate limiting domain - admission control for outbound API calls

mod rate_limiter;

pub use rate_limiter::RateLimiter;
