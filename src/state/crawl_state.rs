use crate::state::PageRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Outcome of a registration attempt
///
/// Rejections are expected-path terminations, not errors: a rejected task
/// simply stops without spawning children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The record was inserted into the visited set
    Accepted,
    /// Another task already registered this key
    DuplicateKey,
    /// The visited set already holds the maximum number of pages
    CapReached,
}

impl Registration {
    /// Returns true if the record was inserted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Shared state for one crawl invocation
///
/// The visited map is the only mutable resource tasks share. Every decision
/// that reads it (cap check, duplicate check) happens inside the same
/// critical section as the insert, so two tasks can never both believe they
/// were first to register a key, and the map can never grow past
/// `max_pages`.
pub struct CrawlState {
    /// Normalized key -> page record for every registered page
    visited: Mutex<HashMap<String, PageRecord>>,

    /// Host component of the seed URL; only links on this host are followed
    base_host: String,

    /// Upper bound on the number of registered pages
    max_pages: usize,

    /// Admission gate bounding concurrently in-flight fetches
    gate: Arc<Semaphore>,
}

impl CrawlState {
    /// Creates the shared state for a crawl
    ///
    /// # Arguments
    ///
    /// * `base_host` - Host component of the seed URL
    /// * `max_pages` - Cap on registered pages
    /// * `max_concurrency` - Size of the fetch admission gate
    pub fn new(base_host: String, max_pages: usize, max_concurrency: usize) -> Self {
        Self {
            visited: Mutex::new(HashMap::new()),
            base_host,
            max_pages,
            gate: Arc::new(Semaphore::new(max_concurrency)),
        }
    }

    /// The host every followed link must match
    pub fn base_host(&self) -> &str {
        &self.base_host
    }

    /// The semaphore gating concurrent fetches
    pub fn gate(&self) -> &Arc<Semaphore> {
        &self.gate
    }

    /// Returns true if a record is already registered under `key`
    ///
    /// A read-only convenience for skipping work on pages that are already
    /// in the visited set. Passing this check does not reserve the key;
    /// only `register` decides who wins.
    pub fn is_visited(&self, key: &str) -> bool {
        self.visited.lock().unwrap().contains_key(key)
    }

    /// Attempts to register a page record under its normalized key
    ///
    /// Cap check, duplicate check, and insert run under one lock
    /// acquisition. Exactly one caller per key can ever observe
    /// `Registration::Accepted`.
    pub fn register(&self, key: &str, record: PageRecord) -> Registration {
        let mut visited = self.visited.lock().unwrap();

        if visited.len() >= self.max_pages {
            return Registration::CapReached;
        }
        if visited.contains_key(key) {
            return Registration::DuplicateKey;
        }

        visited.insert(key.to_string(), record);
        Registration::Accepted
    }

    /// Number of registered pages
    pub fn page_count(&self) -> usize {
        self.visited.lock().unwrap().len()
    }

    /// Drains the visited map once the crawl has settled
    pub fn take_records(&self) -> HashMap<String, PageRecord> {
        std::mem::take(&mut *self.visited.lock().unwrap())
    }
}
