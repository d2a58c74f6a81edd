//! Crawl engine - concurrent same-host traversal
//!
//! This module drives the whole crawl:
//! - One task per discovered URL, spawned dynamically as links are found
//! - A shared [`CrawlState`] that deduplicates pages and enforces the page
//!   cap through a single atomic registration step
//! - A counting semaphore that bounds how many tasks are past the fetch
//!   step at once
//! - A tree-shaped join protocol: every task awaits its children, and the
//!   run returns only after the seed task's whole subtree has settled
//!
//! The task topology is a tree even though the link structure is a graph;
//! registration is what collapses revisits. Per-task failures (unparseable
//! links, off-host links, fetch errors) terminate only that task's subtree.

use crate::config::CrawlConfig;
use crate::crawler::extractor::extract_page_data;
use crate::crawler::fetcher::{build_http_client, fetch_html};
use crate::state::{CrawlState, PageRecord};
use crate::url::normalize_url;
use crate::Result;
use futures::future::{join_all, BoxFuture};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

/// The crawl engine for one invocation
pub struct Engine {
    state: Arc<CrawlState>,
    client: Client,
    seed_url: Url,
}

impl Engine {
    /// Creates an engine from a validated configuration
    ///
    /// Builds the shared HTTP client and the crawl state. No request is
    /// made until [`Engine::run`].
    ///
    /// # Arguments
    ///
    /// * `config` - The validated crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Engine)` - Ready to run
    /// * `Err(AtlasError)` - Failed to build the HTTP client
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let client = build_http_client()?;
        let state = Arc::new(CrawlState::new(
            config.seed_host,
            config.max_pages,
            config.max_concurrency,
        ));

        Ok(Self {
            state,
            client,
            seed_url: config.seed_url,
        })
    }

    /// Runs the crawl to completion and returns the registered pages
    ///
    /// Seeds a single task for the seed URL and blocks until that task and
    /// every transitively spawned child has finished, then drains the
    /// visited map. The map's iteration order is unspecified.
    pub async fn run(self) -> HashMap<String, PageRecord> {
        tracing::info!(
            "crawling {} (host {})",
            self.seed_url,
            self.state.base_host()
        );

        let seed = tokio::spawn(crawl_page(
            Arc::clone(&self.state),
            self.client.clone(),
            self.seed_url.to_string(),
        ));

        if let Err(e) = seed.await {
            tracing::error!("seed task panicked: {}", e);
        }

        let records = self.state.take_records();
        tracing::info!("crawl settled with {} registered pages", records.len());
        records
    }
}

/// Crawls one URL and, on successful registration, its outgoing links
///
/// The per-task flow:
/// 1. Parse the URL; drop the task silently on failure
/// 2. Drop the task if the host differs from the crawl's base host
/// 3. Compute the deduplication key; drop the task on failure
/// 4. Drop the task if the key is already registered, so a link back to a
///    visited page costs no second fetch
/// 5. Acquire an admission permit, then fetch the HTML
/// 6. Extract the page record
/// 7. Register atomically; a duplicate or the page cap ends the task here
/// 8. Spawn one child task per outgoing link, release the permit, and
///    await the children
///
/// Children acquire their own permits, which is why the permit is released
/// before the join: a parent waiting on children must not hold a slot they
/// may need.
fn crawl_page(state: Arc<CrawlState>, client: Client, raw_url: String) -> BoxFuture<'static, ()> {
    Box::pin(async move {
        let parsed = match Url::parse(&raw_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("dropping unparseable link {}: {}", raw_url, e);
                return;
            }
        };

        match parsed.host_str() {
            Some(host) if host == state.base_host() => {}
            _ => {
                tracing::debug!("dropping off-host link {}", raw_url);
                return;
            }
        }

        let key = match normalize_url(&raw_url) {
            Ok(key) => key,
            Err(e) => {
                tracing::debug!("dropping unnormalizable link {}: {}", raw_url, e);
                return;
            }
        };

        if state.is_visited(&key) {
            tracing::debug!("already visited {}", key);
            return;
        }

        let permit = match state.gate().clone().acquire_owned().await {
            Ok(permit) => permit,
            // The semaphore is never closed while tasks are running
            Err(_) => return,
        };

        let html = match fetch_html(&client, &raw_url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("error fetching {}: {}", raw_url, e);
                return;
            }
        };

        let record = extract_page_data(&html, &raw_url);
        let links = record.outgoing_links.clone();

        let outcome = state.register(&key, record);
        if !outcome.is_accepted() {
            tracing::debug!("not registering {}: {:?}", key, outcome);
            return;
        }
        tracing::debug!(
            "registered {} ({} pages so far)",
            key,
            state.page_count()
        );

        let children: Vec<_> = links
            .into_iter()
            .map(|link| tokio::spawn(crawl_page(Arc::clone(&state), client.clone(), link)))
            .collect();

        drop(permit);

        for result in join_all(children).await {
            if let Err(e) = result {
                tracing::error!("crawl task panicked: {}", e);
            }
        }
    })
}
