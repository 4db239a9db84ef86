use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use docharvest::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Crawling {}", config.site.base_url);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::NamingConvention;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[site]
name = "Example Docs"
base-url = "https://docs.example.com"

[crawling]
max-depth = 3
rate-limit = 2.0
include-patterns = ["/docs/*"]
exclude-patterns = ["/docs/private/*"]

[error-handling]
max-retries = 2
retry-delay = 1

[user-agent]
crawler-name = "docharvest"
crawler-version = "0.1"

[output]
naming-convention = "UPPERCASE_WITH_UNDERSCORES"
file-prefix = "EX_"

[link-handling]
preserve-anchor-links = false
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.site.base_url, "https://docs.example.com");
        assert_eq!(config.crawling.max_depth, 3);
        assert_eq!(config.crawling.rate_limit, 2.0);
        assert_eq!(config.crawling.include_patterns, vec!["/docs/*"]);
        assert_eq!(config.error_handling.max_retries, 2);
        assert_eq!(
            config.output.naming_convention,
            NamingConvention::UpperSnake
        );
        assert_eq!(config.output.file_prefix, "EX_");
        assert!(!config.link_handling.preserve_anchor_links);
    }

    #[test]
    fn test_defaults_applied() {
        let config_content = r#"
[site]
name = "Example Docs"
base-url = "https://docs.example.com"

[crawling]

[user-agent]
crawler-name = "docharvest"
crawler-version = "0.1"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawling.max_depth, 5);
        assert_eq!(config.crawling.rate_limit, 1.0);
        assert_eq!(config.error_handling.max_retries, 3);
        assert_eq!(config.error_handling.retry_delay, 2);
        assert!(config.crawling.include_patterns.is_empty());
        assert!(config.link_handling.preserve_anchor_links);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[site]
name = "Example Docs"
base-url = "https://docs.example.com"

[crawling]
rate-limit = 0.0

[user-agent]
crawler-name = "docharvest"
crawler-version = "0.1"
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
