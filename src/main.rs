//! Docharvest main entry point
//!
//! This is the command-line interface for the docharvest documentation crawler.

use anyhow::Context;
use clap::Parser;
use docharvest::config::load_config;
use docharvest::{Config, CrawlEngine, FailureCategory, Resolver};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Docharvest: a documentation site mirroring crawler
///
/// Docharvest crawls a single documentation host breadth-first, respecting
/// robots.txt and a global rate limit, and maps every page to a stable
/// flat-file identifier.
#[derive(Parser, Debug)]
#[command(name = "docharvest")]
#[command(version = "0.1.0")]
#[command(about = "A documentation site mirroring crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_crawl(&config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docharvest=info,warn"),
            1 => EnvFilter::new("docharvest=debug,info"),
            2 => EnvFilter::new("docharvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    println!("=== Docharvest Dry Run ===\n");

    println!("Site:");
    println!("  Name: {}", config.site.name);
    println!("  Base URL: {}", config.site.base_url);

    println!("\nCrawling:");
    println!("  Max depth: {}", config.crawling.max_depth);
    println!("  Rate limit: {} req/s", config.crawling.rate_limit);
    println!("  Request timeout: {}s", config.crawling.request_timeout);

    println!(
        "\nInclude patterns ({}):",
        config.crawling.include_patterns.len()
    );
    for pattern in &config.crawling.include_patterns {
        println!("  - {}", pattern);
    }

    println!(
        "\nExclude patterns ({}):",
        config.crawling.exclude_patterns.len()
    );
    for pattern in &config.crawling.exclude_patterns {
        println!("  - {}", pattern);
    }

    println!("\nError handling:");
    println!("  Max retries: {}", config.error_handling.max_retries);
    println!("  Retry delay: {}s", config.error_handling.retry_delay);

    println!("\nUser agent: {}", config.user_agent.agent_string());

    println!("\nOutput:");
    println!("  Naming convention: {:?}", config.output.naming_convention);
    println!("  File prefix: {:?}", config.output.file_prefix);

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling from {}", config.site.base_url);

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config) -> anyhow::Result<()> {
    let engine = CrawlEngine::new(config)?;
    let mut resolver = Resolver::from_config(config)?;

    let report = engine.crawl().await.context("crawl failed")?;

    println!("=== Crawl of {} ===\n", config.site.name);

    println!("Pages ({}):", report.pages.len());
    for page in &report.pages {
        let ident = resolver.assign(&page.url);
        println!("  {} -> {}", page.url, ident);
    }

    if !report.external_links.is_empty() {
        println!("\nExternal links ({}):", report.external_links.len());
        for link in &report.external_links {
            println!("  {}", link);
        }
    }

    let fetch_failures: Vec<_> = report.failures.fetch_failures().collect();
    if !fetch_failures.is_empty() {
        println!("\nFailed URLs ({}):", fetch_failures.len());
        for failure in &fetch_failures {
            println!("  {} ({})", failure.url, failure.message);
        }
    }

    let skipped = report.failures.count(FailureCategory::RobotsDenied)
        + report.failures.count(FailureCategory::OutOfScope)
        + report.failures.count(FailureCategory::DepthExceeded);
    if skipped > 0 {
        tracing::info!("{} URLs skipped by policy", skipped);
    }

    Ok(())
}
