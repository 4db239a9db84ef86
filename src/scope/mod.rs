//! Scope policy: which URLs a crawl is permitted to visit
//!
//! Scope is defined entirely by static configuration: the base host plus
//! include/exclude glob patterns matched against the URL path component.

use crate::config::Config;
use crate::ConfigError;
use glob::Pattern;
use url::Url;

/// Decides whether a URL is in-domain and in-scope for the crawl
///
/// Matching is against the path component only; query and fragment play no
/// part. Exclude patterns overrule include patterns, and an empty include
/// list admits every path that is not excluded.
#[derive(Debug)]
pub struct ScopePolicy {
    base_host: String,
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl ScopePolicy {
    /// Builds a scope policy from the configuration
    ///
    /// Fails if the base URL has no host or a pattern does not compile;
    /// both are configuration errors and abort the run.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let base = Url::parse(&config.site.base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;
        let base_host = base
            .host_str()
            .ok_or_else(|| ConfigError::InvalidUrl("base-url must have a host".to_string()))?
            .to_string();

        let compile = |patterns: &[String]| -> Result<Vec<Pattern>, ConfigError> {
            patterns
                .iter()
                .map(|p| {
                    Pattern::new(p).map_err(|e| {
                        ConfigError::InvalidPattern(format!("'{}': {}", p, e))
                    })
                })
                .collect()
        };

        Ok(Self {
            base_host,
            include: compile(&config.crawling.include_patterns)?,
            exclude: compile(&config.crawling.exclude_patterns)?,
        })
    }

    /// Returns the host that defines the crawl domain
    pub fn base_host(&self) -> &str {
        &self.base_host
    }

    /// Returns true if the URL has the same host as the base URL
    pub fn same_host(&self, url: &Url) -> bool {
        url.host_str() == Some(self.base_host.as_str())
    }

    /// Checks whether a URL is in-domain and matches the configured patterns
    ///
    /// A URL is rejected if its host differs from the base host, or if its
    /// path matches any exclude pattern. Otherwise it is accepted when the
    /// include list is empty or at least one include pattern matches.
    pub fn in_scope(&self, url: &Url) -> bool {
        if !self.same_host(url) {
            return false;
        }

        let path = url.path();

        for pattern in &self.exclude {
            if pattern.matches(path) {
                tracing::debug!("URL excluded by pattern {}: {}", pattern.as_str(), url);
                return false;
            }
        }

        if self.include.is_empty() {
            return true;
        }

        if self.include.iter().any(|p| p.matches(path)) {
            return true;
        }

        tracing::debug!("URL not matched by any include pattern: {}", url);
        false
    }
}
