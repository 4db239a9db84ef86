//! Robots.txt handling
//!
//! Fetching and parsing of `/robots.txt` for the crawl host. A missing or
//! unreachable robots.txt degrades to an unrestricted rule set; only a 200
//! response is ever parsed.

mod rules;

pub use rules::RobotsRules;

use crate::crawler::{FetchOutcome, Fetcher};
use url::Url;

/// Fetches and parses robots.txt for the crawl host
///
/// The request goes through the shared [`Fetcher`], so it is rate limited and
/// retried exactly like any page fetch. Every outcome other than a 200
/// response is logged and treated as "no restrictions" — robots problems are
/// never fatal to a crawl.
pub async fn fetch_robots(fetcher: &Fetcher, base_url: &Url, agent: &str) -> RobotsRules {
    let robots_url = match base_url.join("/robots.txt") {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!("Could not build robots.txt URL from {}: {}", base_url, e);
            return RobotsRules::unrestricted();
        }
    };

    match fetcher.fetch(&robots_url).await {
        FetchOutcome::Success { status, body } if status == 200 => {
            RobotsRules::parse(&body, agent)
        }
        FetchOutcome::Success { status, .. } => {
            tracing::warn!("Failed to fetch robots.txt: status {}", status);
            RobotsRules::unrestricted()
        }
        FetchOutcome::NotFound => {
            tracing::info!("No robots.txt found, crawling without restrictions");
            RobotsRules::unrestricted()
        }
        outcome => {
            tracing::warn!("Error fetching robots.txt: {}", outcome.describe());
            RobotsRules::unrestricted()
        }
    }
}
