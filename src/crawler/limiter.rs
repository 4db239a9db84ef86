//! Global request rate limiter
//!
//! One shared clock for the whole crawl: every fetch attempt, robots.txt
//! included, waits its turn here. The clock is global rather than per-host
//! because a crawl targets exactly one host.

use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Enforces a minimum interval between consecutive requests
///
/// The limiter stores the instant of the last admitted request behind a
/// mutex. [`acquire`](RateLimiter::acquire) holds the lock while sleeping out
/// the remaining interval, so callers are admitted strictly one at a time
/// even if the engine is ever driven from multiple tasks.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Creates a limiter admitting `rate_limit` requests per second
    ///
    /// `rate_limit` must be positive; configuration validation guarantees
    /// this before a limiter is ever built.
    pub fn new(rate_limit: f64) -> Self {
        Self {
            min_interval: Duration::from_secs_f64(1.0 / rate_limit),
            last_request: Mutex::new(None),
        }
    }

    /// Blocks until the minimum interval since the last request has elapsed,
    /// then advances the shared clock
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                tracing::debug!("Rate limiting: sleeping for {:?}", wait);
                tokio::time::sleep(wait).await;
            }
        }

        *last = Some(Instant::now());
    }

    /// Returns the configured minimum interval between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
