//! HTTP fetcher with bounded retries
//!
//! One GET per attempt, classified into a [`FetchOutcome`]. Success and 404
//! are terminal immediately; everything else is retried up to the configured
//! budget with a fixed delay between attempts. Every attempt passes the
//! shared rate limiter exactly once.

use crate::config::Config;
use crate::crawler::limiter::RateLimiter;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Classified result of fetching one URL
#[derive(Debug)]
pub enum FetchOutcome {
    /// 2xx response with the body retrieved
    Success {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// HTTP 404: the page does not exist
    ///
    /// Not an error; the URL is simply excluded from the discovered list.
    NotFound,

    /// 4xx other than 404 after the retry budget was exhausted
    ClientError {
        /// Last observed status code
        status: u16,
    },

    /// 5xx after the retry budget was exhausted
    ServerError {
        /// Last observed status code
        status: u16,
    },

    /// Transport-level failure (timeout, connect, body read) after the retry
    /// budget was exhausted
    NetworkFailure {
        /// Error description
        message: String,
    },
}

impl FetchOutcome {
    /// Returns true for outcomes that yield a usable page body
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Short human-readable description for logs and failure events
    pub fn describe(&self) -> String {
        match self {
            Self::Success { status, .. } => format!("HTTP {}", status),
            Self::NotFound => "HTTP 404".to_string(),
            Self::ClientError { status } => format!("HTTP {} (client error)", status),
            Self::ServerError { status } => format!("HTTP {} (server error)", status),
            Self::NetworkFailure { message } => message.clone(),
        }
    }
}

/// Performs rate-limited HTTP GETs with retry on failure
pub struct Fetcher {
    client: Client,
    limiter: Arc<RateLimiter>,
    max_retries: u32,
    retry_delay: Duration,
}

impl Fetcher {
    /// Builds a fetcher from the configuration and a shared rate limiter
    pub fn new(config: &Config, limiter: Arc<RateLimiter>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.agent_string())
            .timeout(Duration::from_secs(config.crawling.request_timeout))
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            limiter,
            max_retries: config.error_handling.max_retries,
            retry_delay: Duration::from_secs(config.error_handling.retry_delay),
        })
    }

    /// Fetches a URL, retrying up to `max_retries` additional times
    ///
    /// # Classification
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | 2xx | terminal Success |
    /// | 404 | terminal NotFound |
    /// | other 4xx | retried, then ClientError |
    /// | 5xx | retried, then ServerError |
    /// | transport failure | retried, then NetworkFailure |
    ///
    /// Non-404 4xx statuses will not change between attempts, so retrying
    /// them is wasted work; the behavior is kept for compatibility with the
    /// established retry policy.
    pub async fn fetch(&self, url: &Url) -> FetchOutcome {
        let mut last = FetchOutcome::NetworkFailure {
            message: "no attempt made".to_string(),
        };

        for attempt in 0..=self.max_retries {
            self.limiter.acquire().await;

            tracing::debug!("Fetching {} (attempt {}/{})", url, attempt + 1, self.max_retries + 1);

            match self.client.get(url.clone()).send().await {
                Ok(response) => {
                    let status = response.status().as_u16();

                    if (200..300).contains(&status) {
                        match response.text().await {
                            Ok(body) => return FetchOutcome::Success { status, body },
                            Err(e) => {
                                last = FetchOutcome::NetworkFailure {
                                    message: format!("failed to read body: {}", e),
                                };
                            }
                        }
                    } else if status == 404 {
                        return FetchOutcome::NotFound;
                    } else if status < 500 {
                        last = FetchOutcome::ClientError { status };
                    } else {
                        last = FetchOutcome::ServerError { status };
                    }

                    tracing::warn!(
                        "Attempt {}/{} for {} failed: {}",
                        attempt + 1,
                        self.max_retries + 1,
                        url,
                        last.describe()
                    );
                }
                Err(e) => {
                    last = FetchOutcome::NetworkFailure {
                        message: classify_transport_error(&e),
                    };
                    tracing::warn!(
                        "Attempt {}/{} for {} failed: {}",
                        attempt + 1,
                        self.max_retries + 1,
                        url,
                        last.describe()
                    );
                }
            }

            if attempt < self.max_retries {
                tokio::time::sleep(self.retry_delay).await;
            }
        }

        last
    }
}

/// Maps a reqwest error to a short stable description
fn classify_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timeout".to_string()
    } else if e.is_connect() {
        "connection refused".to_string()
    } else {
        e.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    fn make_fetcher(max_retries: u32) -> Fetcher {
        let mut config = test_config("https://docs.example.com");
        config.error_handling.max_retries = max_retries;
        let limiter = Arc::new(RateLimiter::new(config.crawling.rate_limit));
        Fetcher::new(&config, limiter).unwrap()
    }

    #[test]
    fn test_build_fetcher() {
        let fetcher = make_fetcher(3);
        assert_eq!(fetcher.max_retries, 3);
    }

    #[test]
    fn test_outcome_describe() {
        assert_eq!(
            FetchOutcome::Success {
                status: 200,
                body: String::new()
            }
            .describe(),
            "HTTP 200"
        );
        assert_eq!(FetchOutcome::NotFound.describe(), "HTTP 404");
        assert_eq!(
            FetchOutcome::ServerError { status: 503 }.describe(),
            "HTTP 503 (server error)"
        );
    }

    #[test]
    fn test_is_success() {
        assert!(FetchOutcome::Success {
            status: 200,
            body: String::new()
        }
        .is_success());
        assert!(!FetchOutcome::NotFound.is_success());
        assert!(!FetchOutcome::ClientError { status: 403 }.is_success());
    }

    // Retry behavior against live responses is covered by the wiremock
    // integration tests in tests/crawl_tests.rs.
}
