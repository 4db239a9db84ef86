//! Configuration module for docharvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use docharvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Max depth: {}", config.crawling.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlingConfig, ErrorHandlingConfig, LinkHandlingConfig, OutputConfig, SiteConfig,
    UserAgentConfig,
};

// Re-export parser functions
pub use parser::load_config;

/// Builds a minimal valid configuration against the given base URL
///
/// Shared by unit and integration tests; rate limit and delays are tuned so
/// tests run quickly.
#[doc(hidden)]
pub fn test_config(base_url: &str) -> Config {
    Config {
        site: SiteConfig {
            name: "Test Docs".to_string(),
            base_url: base_url.to_string(),
        },
        crawling: CrawlingConfig {
            max_depth: 2,
            rate_limit: 1000.0,
            request_timeout: 5,
            include_patterns: vec![],
            exclude_patterns: vec![],
        },
        error_handling: ErrorHandlingConfig {
            max_retries: 1,
            retry_delay: 0,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestHarvester".to_string(),
            crawler_version: "1.0".to_string(),
        },
        output: OutputConfig::default(),
        link_handling: LinkHandlingConfig::default(),
    }
}
