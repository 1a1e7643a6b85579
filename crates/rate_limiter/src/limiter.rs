use std::fmt;
use std::time::{Duration, Instant};

use actix_web::{HttpResponse, http::StatusCode};
use dashmap::DashMap;

/// The state of a single client within its current window.
struct Window {
    started_at: Instant,
    count: u32,
}

/// Counts the requests of each client over a fixed time window.
pub struct RateLimiter {
    limit: u32,
    period: Duration,
    windows: DashMap<String, Window>,
}

impl RateLimiter {
    /// Creates a limiter allowing `limit` requests per client per `period`.
    pub fn new(limit: u32, period: Duration) -> Self {
        Self {
            limit,
            period,
            windows: DashMap::new(),
        }
    }

    /// Records a request of the provided client and checks it against the
    /// limit. The window of a client restarts once its period has elapsed.
    pub fn check(&self, key: &str) -> Result<(), RateLimitExceeded> {
        let now = Instant::now();
        let mut window = self
            .windows
            .entry(key.to_owned())
            .or_insert_with(|| Window {
                started_at: now,
                count: 0,
            });

        if now.duration_since(window.started_at) >= self.period {
            window.started_at = now;
            window.count = 0;
        }

        window.count += 1;
        if window.count > self.limit {
            return Err(RateLimitExceeded {
                limit: self.limit,
                period: self.period,
            });
        }

        Ok(())
    }
}

/// The error returned to a client that exceeded the limit of its window.
#[derive(Debug)]
pub struct RateLimitExceeded {
    pub limit: u32,
    pub period: Duration,
}

#[derive(serde::Serialize)]
struct RateLimitExceededResponse {
    message: String,
}

impl fmt::Display for RateLimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rate limit exceeded: {} per {}s",
            self.limit,
            self.period.as_secs()
        )
    }
}

impl std::error::Error for RateLimitExceeded {}

impl actix_web::ResponseError for RateLimitExceeded {
    fn status_code(&self) -> StatusCode {
        StatusCode::TOO_MANY_REQUESTS
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::TooManyRequests().json(RateLimitExceededResponse {
            message: self.to_string(),
        })
    }
}
