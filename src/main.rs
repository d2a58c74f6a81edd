//! Site-Atlas main entry point
//!
//! This is the command-line interface for the Site-Atlas site mapper.

use clap::Parser;
use site_atlas::config::{CrawlConfig, DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_PAGES};
use site_atlas::crawler::crawl;
use site_atlas::output::write_report;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Name of the report file written into the current working directory
const REPORT_FILE: &str = "report.csv";

/// Site-Atlas: a same-host site mapper
///
/// Site-Atlas crawls a single website starting from a seed URL, following
/// every link that stays on the seed's host, and writes a CSV report of
/// the pages it finds.
#[derive(Parser, Debug)]
#[command(name = "site-atlas")]
#[command(version = "1.0.0")]
#[command(about = "A same-host site mapper", long_about = None)]
struct Cli {
    /// Seed URL the crawl starts from
    #[arg(value_name = "SEED_URL")]
    seed_url: String,

    /// Maximum number of concurrent page fetches
    #[arg(value_name = "MAX_CONCURRENCY", default_value_t = DEFAULT_MAX_CONCURRENCY)]
    max_concurrency: usize,

    /// Maximum number of pages to record
    #[arg(value_name = "MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES)]
    max_pages: usize,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // A malformed seed URL aborts the run before any task is spawned
    let config = CrawlConfig::new(&cli.seed_url, cli.max_concurrency, cli.max_pages)?;

    tracing::info!("starting crawl of {}", cli.seed_url);
    let records = crawl(config).await?;

    tracing::info!("writing {} pages to {}", records.len(), REPORT_FILE);
    if let Err(e) = write_report(&records, Path::new(REPORT_FILE)) {
        tracing::error!("error writing {}: {}", REPORT_FILE, e);
        return Err(e.into());
    }

    tracing::info!("report written to {}", REPORT_FILE);
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_atlas=info,warn"),
            1 => EnvFilter::new("site_atlas=debug,info"),
            2 => EnvFilter::new("site_atlas=trace,debug"),
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
