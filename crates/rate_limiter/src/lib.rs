//! An actix-web middleware bounding the amount of requests a single client
//! address may send to a route within a time window.

mod limiter;
mod middleware;

pub use limiter::{RateLimitExceeded, RateLimiter};
pub use middleware::RateLimit;
