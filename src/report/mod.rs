//! Structured per-URL failure reporting
//!
//! Failures never abort a crawl; they are collected here as structured
//! events and handed back to the caller alongside the discovered page list.

use chrono::{DateTime, Utc};
use std::fmt;

/// Category of a per-URL crawl event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureCategory {
    /// Fetch retry budget exhausted or terminal HTTP error
    Fetch,
    /// URL denied by robots.txt (informational skip, not an error)
    RobotsDenied,
    /// URL rejected by the scope policy (informational skip, not an error)
    OutOfScope,
    /// URL discovered beyond the configured depth bound
    DepthExceeded,
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Fetch => "fetch",
            Self::RobotsDenied => "robots-denied",
            Self::OutOfScope => "out-of-scope",
            Self::DepthExceeded => "depth-exceeded",
        };
        f.write_str(s)
    }
}

/// One recorded per-URL event
#[derive(Debug, Clone)]
pub struct CrawlFailure {
    pub url: String,
    pub category: FailureCategory,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Collects per-URL failures and skips for one crawl invocation
///
/// Owned by the engine and returned with the crawl report; a fresh tracker
/// is created per crawl so independent crawls never share state.
#[derive(Debug, Default)]
pub struct FailureTracker {
    events: Vec<CrawlFailure>,
}

impl FailureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one event
    pub fn record(&mut self, url: &str, category: FailureCategory, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Tracked event: {} - {} - {}", category, url, message);
        self.events.push(CrawlFailure {
            url: url.to_string(),
            category,
            message,
            timestamp: Utc::now(),
        });
    }

    /// All recorded events, in recording order
    pub fn events(&self) -> &[CrawlFailure] {
        &self.events
    }

    /// Number of recorded events in the given category
    pub fn count(&self, category: FailureCategory) -> usize {
        self.events
            .iter()
            .filter(|e| e.category == category)
            .count()
    }

    /// True fetch failures, excluding informational skips
    pub fn fetch_failures(&self) -> impl Iterator<Item = &CrawlFailure> {
        self.events
            .iter()
            .filter(|e| e.category == FailureCategory::Fetch)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
