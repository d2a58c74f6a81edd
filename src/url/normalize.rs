use crate::UrlError;
use url::Url;

/// Normalizes a URL into the key used for page deduplication
///
/// The key is `host/path` with leading and trailing slashes stripped from
/// the path. Scheme, query string, and fragment are discarded, so URLs that
/// differ only in those parts (or in a trailing slash) map to the same key.
/// A non-default explicit port stays part of the key, which keeps pages on
/// `host:8080` distinct from pages on `host`.
///
/// # Arguments
///
/// * `raw` - The URL string to normalize, absolute
///
/// # Returns
///
/// * `Ok(String)` - The deduplication key
/// * `Err(UrlError)` - The input is not a valid URL or has no host
///
/// # Examples
///
/// ```
/// use site_atlas::url::normalize_url;
///
/// let key = normalize_url("https://example.com/path/").unwrap();
/// assert_eq!(key, "example.com/path");
/// ```
pub fn normalize_url(raw: &str) -> Result<String, UrlError> {
    let url = Url::parse(raw).map_err(|e| UrlError::Parse(e.to_string()))?;
    let host = url.host_str().ok_or(UrlError::MissingHost)?;
    let path = url.path().trim_matches('/');

    let key = match url.port() {
        Some(port) => format!("{}:{}/{}", host, port, path),
        None => format!("{}/{}", host, path),
    };

    Ok(key)
}
