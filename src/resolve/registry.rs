//! Identifier registry with collision disambiguation

use crate::config::Config;
use crate::resolve::naming::{path_to_identifier, NamingConvention};
use crate::ConfigError;
use regex::Regex;
use std::collections::HashMap;
use url::Url;

/// Markdown link syntax: an optional image bang, bracketed text, and a
/// parenthesized target.
const LINK_PATTERN: &str = r"(!?)\[([^\]]*)\]\(([^)\s]*)\)";

/// Maps crawled URLs to canonical file identifiers and rewrites links
///
/// The resolver is stateful: identifiers are assigned first-come first-served
/// and the mapping is stable for the lifetime of the resolver, so a URL asked
/// about twice always gets the same answer. Distinct URLs whose paths reduce
/// to the same identifier are disambiguated with a numeric suffix.
#[derive(Debug)]
pub struct Resolver {
    pub(super) convention: NamingConvention,
    pub(super) prefix: String,
    pub(super) preserve_anchors: bool,
    pub(super) base_host: String,
    pub(super) link_pattern: Regex,
    /// url -> identifier, the stable assignment record
    by_url: HashMap<String, String>,
    /// identifier -> first owning url, for collision detection
    taken: HashMap<String, String>,
}

impl Resolver {
    /// Builds a resolver from the configuration
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let base = Url::parse(&config.site.base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;
        let base_host = base
            .host_str()
            .ok_or_else(|| ConfigError::InvalidUrl("base-url must have a host".to_string()))?
            .to_string();

        let link_pattern = Regex::new(LINK_PATTERN)
            .map_err(|e| ConfigError::InvalidPattern(format!("link pattern: {}", e)))?;

        Ok(Self {
            convention: config.output.naming_convention,
            prefix: config.output.file_prefix.clone(),
            preserve_anchors: config.link_handling.preserve_anchor_links,
            base_host,
            link_pattern,
            by_url: HashMap::new(),
            taken: HashMap::new(),
        })
    }

    /// Assigns (or returns the already-assigned) identifier for a URL
    ///
    /// Fragments are irrelevant to identity; callers pass fragment-free URLs.
    /// When the derived identifier is already owned by a different URL, a
    /// `_1`, `_2`, ... suffix is inserted before the extension until a free
    /// identifier is found.
    pub fn assign(&mut self, url: &Url) -> String {
        let key = url.as_str();

        if let Some(existing) = self.by_url.get(key) {
            return existing.clone();
        }

        let base_ident = path_to_identifier(url.path(), self.convention, &self.prefix);

        let ident = if self.taken.contains_key(&base_ident) {
            let mut n = 1;
            loop {
                let candidate = with_suffix(&base_ident, n);
                if !self.taken.contains_key(&candidate) {
                    tracing::debug!(
                        "Identifier collision for {}: {} taken, using {}",
                        url,
                        base_ident,
                        candidate
                    );
                    break candidate;
                }
                n += 1;
            }
        } else {
            base_ident
        };

        self.by_url.insert(key.to_string(), ident.clone());
        self.taken.insert(ident.clone(), key.to_string());
        ident
    }

    /// Looks up the identifier previously assigned to a URL
    pub fn lookup(&self, url: &Url) -> Option<&str> {
        self.by_url.get(url.as_str()).map(String::as_str)
    }

    /// Number of distinct URLs with an assigned identifier
    pub fn len(&self) -> usize {
        self.by_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_url.is_empty()
    }
}

/// Inserts `_n` before the `.md` extension
fn with_suffix(ident: &str, n: u32) -> String {
    match ident.strip_suffix(".md") {
        Some(stem) => format!("{}_{}.md", stem, n),
        None => format!("{}_{}", ident, n),
    }
}
