//! Gallerist main entry point
//!
//! Command-line interface for the Gallerist gallery crawler.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use gallerist::catalog::{read_manifest, run_extraction, write_manifest, CatalogWriter};
use gallerist::config::{load_config_with_hash, Config};
use gallerist::crawler::Crawler;
use gallerist::output::{print_run_summary, CrawlCounts, ExtractCounts, RunSummary};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Gallerist: a directory-listing gallery crawler
///
/// Gallerist walks a remote directory listing, records every leaf gallery
/// page in a manifest, then extracts direct image links from each leaf.
#[derive(Parser, Debug)]
#[command(name = "gallerist")]
#[command(version = "1.0.0")]
#[command(about = "A directory-listing gallery crawler", long_about = None)]
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

    /// Crawl and write the manifest, skip the extraction phase
    #[arg(long, conflicts_with = "extract_only")]
    crawl_only: bool,

    /// Reuse an existing manifest and run only the extraction phase
    #[arg(long, conflicts_with = "crawl_only")]
    extract_only: bool,

    /// Validate config and show what would be crawled without fetching
    #[arg(long, conflicts_with_all = ["crawl_only", "extract_only"])]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let started_at = Utc::now();
    let mut crawl_counts: Option<CrawlCounts> = None;
    let mut extract_counts: Option<ExtractCounts> = None;

    let manifest_path = PathBuf::from(&config.output.manifest_path);

    if !cli.extract_only {
        let counts = handle_crawl(config.clone(), &manifest_path).await?;
        crawl_counts = Some(counts);
    }

    if !cli.crawl_only {
        let counts = handle_extraction(config, &manifest_path).await?;
        extract_counts = Some(counts);
    }

    let summary = RunSummary {
        started_at,
        finished_at: Utc::now(),
        crawl: crawl_counts,
        extraction: extract_counts,
    };
    print_run_summary(&summary);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("gallerist=info,warn"),
            1 => EnvFilter::new("gallerist=debug,info"),
            2 => EnvFilter::new("gallerist=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows the crawl plan
fn handle_dry_run(config: &Config) {
    println!("=== Gallerist Dry Run ===\n");

    println!("Site:");
    println!("  Root URL: {}", config.site.root_url);
    println!("  Blacklist entries: {}", config.site.blacklist.len());
    for entry in &config.site.blacklist {
        println!("    - {}", entry);
    }
    println!("  Skip filenames: {:?}", config.site.skip_filenames);
    println!("  Skip extensions: {:?}", config.site.skip_extensions);

    println!("\nHTTP:");
    println!(
        "  Listing timeout: {}s",
        config.http.listing_timeout_secs
    );
    println!("  Leaf timeout: {}s", config.http.leaf_timeout_secs);

    println!("\nOutput:");
    println!("  Manifest: {}", config.output.manifest_path);
    println!("  Catalog directory: {}", config.output.catalog_dir);
    println!("  Catalog file name: {}", config.output.catalog_file_name);

    println!("\nImages:");
    println!("  Direct base URL: {}", config.images.direct_base_url);
    println!("  Token attribute: {}", config.images.token_attr);

    println!("\n✓ Configuration is valid");
}

/// Handles the crawl phase: discover leaves and persist the manifest
async fn handle_crawl(config: Config, manifest_path: &Path) -> anyhow::Result<CrawlCounts> {
    tracing::info!("Fetching all leaf pages recursively from the root listing");

    let crawler = Crawler::new(config)?;
    let report = crawler.run().await;

    write_manifest(manifest_path, crawler.root(), &report.leaves)?;

    Ok(CrawlCounts::from(&report))
}

/// Handles the extraction phase: rebuild every catalog from the manifest
async fn handle_extraction(config: Config, manifest_path: &Path) -> anyhow::Result<ExtractCounts> {
    let leaves = read_manifest(manifest_path)
        .with_context(|| format!("failed to read manifest {}", manifest_path.display()))?;
    tracing::info!("Loaded {} leaf URLs from manifest", leaves.len());

    let writer = CatalogWriter::new(config)?;
    writer.reset_catalog_root()?;

    let report = run_extraction(&writer, &leaves).await;
    Ok(ExtractCounts::from(&report))
}
