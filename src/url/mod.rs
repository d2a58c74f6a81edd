//! URL handling module for Site-Atlas
//!
//! This module provides the normalization that turns a page URL into the
//! deduplication key used by the crawl engine.

mod normalize;

pub use normalize::normalize_url;
