//! Configuration module for Site-Atlas
//!
//! The crawler is configured entirely from command-line arguments; this
//! module turns the raw argument values into a validated [`CrawlConfig`].
//!
//! # Example
//!
//! ```
//! use site_atlas::config::CrawlConfig;
//!
//! let config = CrawlConfig::new("https://example.com", 5, 25).unwrap();
//! assert_eq!(config.seed_host, "example.com");
//! ```

use crate::ConfigError;
use url::Url;

/// Concurrent fetches allowed when the argument is omitted
pub const DEFAULT_MAX_CONCURRENCY: usize = 5;

/// Page cap applied when the argument is omitted
pub const DEFAULT_MAX_PAGES: usize = 25;

/// Validated configuration for one crawl invocation
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// The URL the crawl starts from
    pub seed_url: Url,

    /// Host component of the seed URL; the crawl never leaves this host
    pub seed_host: String,

    /// Maximum number of concurrently in-flight fetches
    pub max_concurrency: usize,

    /// Maximum number of pages registered before the crawl stops growing
    pub max_pages: usize,
}

impl CrawlConfig {
    /// Builds a validated configuration
    ///
    /// # Arguments
    ///
    /// * `seed_url` - The URL the crawl starts from
    /// * `max_concurrency` - Fetch concurrency limit, at least 1
    /// * `max_pages` - Page cap, at least 1
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlConfig)` - The validated configuration
    /// * `Err(ConfigError)` - The seed URL is malformed or a limit is zero
    pub fn new(
        seed_url: &str,
        max_concurrency: usize,
        max_pages: usize,
    ) -> Result<Self, ConfigError> {
        let parsed = Url::parse(seed_url)
            .map_err(|e| ConfigError::InvalidSeed(format!("'{}': {}", seed_url, e)))?;

        let seed_host = parsed
            .host_str()
            .ok_or_else(|| ConfigError::InvalidSeed(format!("'{}' has no host", seed_url)))?
            .to_string();

        if max_concurrency < 1 {
            return Err(ConfigError::Validation(
                "max_concurrency must be at least 1".to_string(),
            ));
        }

        if max_pages < 1 {
            return Err(ConfigError::Validation(
                "max_pages must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            seed_url: parsed,
            seed_host,
            max_concurrency,
            max_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = CrawlConfig::new("https://example.com/start", 8, 100).unwrap();

        assert_eq!(config.seed_url.as_str(), "https://example.com/start");
        assert_eq!(config.seed_host, "example.com");
        assert_eq!(config.max_concurrency, 8);
        assert_eq!(config.max_pages, 100);
    }

    #[test]
    fn test_malformed_seed() {
        let result = CrawlConfig::new("not a url", 5, 25);
        assert!(matches!(result, Err(ConfigError::InvalidSeed(_))));
    }

    #[test]
    fn test_seed_without_host() {
        let result = CrawlConfig::new("mailto:someone@example.com", 5, 25);
        assert!(matches!(result, Err(ConfigError::InvalidSeed(_))));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let result = CrawlConfig::new("https://example.com", 0, 25);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_zero_pages_rejected() {
        let result = CrawlConfig::new("https://example.com", 5, 0);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_host_includes_subdomain() {
        let config = CrawlConfig::new("https://blog.example.com/", 5, 25).unwrap();
        assert_eq!(config.seed_host, "blog.example.com");
    }
}
