//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with status and content-type checks
//! - HTML metadata extraction
//! - The concurrent crawl engine and its termination protocol

mod engine;
mod extractor;
mod fetcher;

pub use engine::Engine;
pub use extractor::extract_page_data;
pub use fetcher::{build_http_client, fetch_html};

use crate::config::CrawlConfig;
use crate::state::PageRecord;
use crate::Result;
use std::collections::HashMap;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client and shared crawl state
/// 2. Seed one task for the seed URL
/// 3. Follow same-host links until the reachable graph is exhausted or the
///    page cap is reached
/// 4. Return the registered pages keyed by normalized URL
///
/// Per-page failures never fail the run; the returned map holds whatever
/// was successfully registered.
///
/// # Arguments
///
/// * `config` - The validated crawl configuration
///
/// # Returns
///
/// * `Ok(HashMap<String, PageRecord>)` - The registered pages
/// * `Err(AtlasError)` - The engine could not be constructed
pub async fn crawl(config: CrawlConfig) -> Result<HashMap<String, PageRecord>> {
    let engine = Engine::new(config)?;
    Ok(engine.run().await)
}
