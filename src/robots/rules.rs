//! Robots.txt rule set and line-oriented parser
//!
//! Only `User-agent`, `Allow` and `Disallow` lines are understood; everything
//! else (crawl-delay, sitemaps, wildcards inside rules) is ignored.

/// Parsed robots.txt rules for one crawler identity
///
/// Two ordered lists of path prefixes, collected from every `User-agent`
/// block that names either the wildcard agent or this crawler. Built once at
/// crawl start and immutable afterward.
#[derive(Debug, Clone, Default)]
pub struct RobotsRules {
    allow: Vec<String>,
    disallow: Vec<String>,
}

impl RobotsRules {
    /// Creates a permissive rule set that allows every path
    ///
    /// Used whenever robots.txt cannot be fetched or parsed; an unreachable
    /// robots.txt is never fatal.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Parses robots.txt content for the given agent string
    ///
    /// Directive lines are honored only while inside a `User-agent` block
    /// matching `*` or the crawler's own agent; blank lines and `#` comments
    /// are skipped. Later matching blocks append their directives after
    /// earlier ones.
    pub fn parse(text: &str, agent: &str) -> Self {
        let mut rules = Self::default();
        let agent_lower = agent.to_lowercase();
        let mut in_matching_block = false;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim().to_lowercase();
            let value = value.trim();

            match key.as_str() {
                "user-agent" => {
                    let block_agent = value.to_lowercase();
                    in_matching_block = block_agent == "*" || agent_lower.contains(&block_agent);
                }
                "allow" if in_matching_block && !value.is_empty() => {
                    rules.allow.push(value.to_string());
                }
                "disallow" if in_matching_block && !value.is_empty() => {
                    rules.disallow.push(value.to_string());
                }
                _ => {}
            }
        }

        tracing::info!(
            "Parsed robots.txt: {} allow rules, {} disallow rules",
            rules.allow.len(),
            rules.disallow.len()
        );

        rules
    }

    /// Checks if a URL path is allowed
    ///
    /// The allow list is consulted first: any allow rule that prefix-matches
    /// admits the path even when a disallow rule also matches. This is a
    /// deliberate simplification of standard robots evaluation (which picks
    /// the longest matching rule); rule specificity never matters here.
    /// A path matching no rule at all is allowed.
    pub fn is_allowed(&self, path: &str) -> bool {
        if self.allow.iter().any(|rule| path.starts_with(rule.as_str())) {
            return true;
        }

        if self
            .disallow
            .iter()
            .any(|rule| path.starts_with(rule.as_str()))
        {
            return false;
        }

        true
    }

    /// Returns true if no rules were collected
    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.disallow.is_empty()
    }
}
