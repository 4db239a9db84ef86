use serde::Deserialize;

use crate::resolve::NamingConvention;

/// Main configuration structure for docharvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub crawling: CrawlingConfig,
    #[serde(rename = "error-handling", default)]
    pub error_handling: ErrorHandlingConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(rename = "link-handling", default)]
    pub link_handling: LinkHandlingConfig,
}

/// Target site identification
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Human-readable site name, used in logs only
    pub name: String,

    /// Base URL of the documentation site; its host defines the crawl scope
    #[serde(rename = "base-url")]
    pub base_url: String,
}

/// Crawl traversal configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlingConfig {
    /// Maximum link depth from the seed URL
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Requests per second across the whole crawl (robots.txt included)
    #[serde(rename = "rate-limit", default = "default_rate_limit")]
    pub rate_limit: f64,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Glob patterns a URL path must match to be crawled (empty = all)
    #[serde(rename = "include-patterns", default)]
    pub include_patterns: Vec<String>,

    /// Glob patterns that exclude a URL path; exclude overrules include
    #[serde(rename = "exclude-patterns", default)]
    pub exclude_patterns: Vec<String>,
}

/// Retry policy for transient fetch failures
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorHandlingConfig {
    /// Additional attempts after the first failed one
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// Fixed delay between attempts, in seconds
    #[serde(rename = "retry-delay", default = "default_retry_delay")]
    pub retry_delay: u64,
}

impl Default for ErrorHandlingConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay: default_retry_delay(),
        }
    }
}

/// User agent identification configuration
///
/// The formatted agent string is sent as the HTTP `User-Agent` header and is
/// also what robots.txt `User-agent` blocks are matched against.
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

impl UserAgentConfig {
    /// Formats the agent string used for both HTTP and robots.txt matching
    pub fn agent_string(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

/// Artifact naming configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Casing/separator convention applied to derived identifiers
    #[serde(rename = "naming-convention", default)]
    pub naming_convention: NamingConvention,

    /// Prefix prepended to every identifier
    #[serde(rename = "file-prefix", default)]
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            naming_convention: NamingConvention::default(),
            file_prefix: String::new(),
        }
    }
}

/// Link rewriting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LinkHandlingConfig {
    /// Whether `#fragment` suffixes on internal links are kept verbatim
    #[serde(rename = "preserve-anchor-links", default = "default_true")]
    pub preserve_anchor_links: bool,
}

impl Default for LinkHandlingConfig {
    fn default() -> Self {
        Self {
            preserve_anchor_links: true,
        }
    }
}

fn default_max_depth() -> u32 {
    5
}

fn default_rate_limit() -> f64 {
    1.0
}

fn default_request_timeout() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    2
}

fn default_true() -> bool {
    true
}
