//! Docharvest: a documentation site mirroring crawler
//!
//! This crate crawls a single documentation host breadth-first, respecting
//! robots.txt and a global rate limit, and maps every fetched URL to a stable
//! flat-file identifier so that cross-page links can be rewritten to stay
//! consistent on disk.

pub mod config;
pub mod crawler;
pub mod report;
pub mod resolve;
pub mod robots;
pub mod scope;

use thiserror::Error;

/// Main error type for docharvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Fetch failed for {url} after {attempts} attempts: {message}")]
    FetchExhausted {
        url: String,
        attempts: u32,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// These are the only errors that abort a run; everything that happens after
/// configuration is loaded is reported per URL and never stops the crawl.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for docharvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CancelToken, CrawlEngine, CrawlReport, FetchOutcome, FetchedPage};
pub use report::{CrawlFailure, FailureCategory, FailureTracker};
pub use resolve::{NamingConvention, Resolver};
pub use scope::ScopePolicy;
