//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the shared HTTP client with a fixed user agent and timeout
//! - GET requests for page content
//! - Status and Content-Type checks
//! - Error classification
//!
//! Fetch failures are per-page events. The engine logs them and drops the
//! page; nothing here is ever retried.

use crate::FetchError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// Per-request timeout applied to every fetch
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client shared by every fetch in a crawl
///
/// The client identifies itself with a fixed `name/version` user agent and
/// applies the same request timeout to every page.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(REQUEST_TIMEOUT)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its HTML body
///
/// # Request Flow
///
/// 1. Send a GET request
/// 2. Any status >= 400 fails the fetch
/// 3. A Content-Type that is not `text/html` fails the fetch
/// 4. Read and return the body
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The HTML body
/// * `Err(FetchError)` - The classified failure
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await.map_err(classify_error)?;

    let status = response.status();
    if status.as_u16() >= 400 {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.starts_with("text/html") {
        return Err(FetchError::ContentType { content_type });
    }

    response.text().await.map_err(classify_error)
}

/// Maps a reqwest error onto the fetcher's error taxonomy
fn classify_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Io(error.to_string())
    }
}
