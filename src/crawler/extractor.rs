//! HTML metadata extraction
//!
//! This module turns a fetched HTML document into a [`PageRecord`]:
//! - First top-level heading
//! - First paragraph, preferring paragraphs inside `<main>`
//! - Outgoing links from `<a href>` tags
//! - Image URLs from `<img src>` tags
//!
//! Malformed HTML never fails extraction; missing elements simply leave
//! their fields empty.

use crate::state::PageRecord;
use scraper::{Html, Selector};
use url::Url;

/// Extracts a page record from an HTML document
///
/// Relative hrefs and srcs are resolved against `page_url`. Every resolved
/// reference is rendered as `scheme://host/path`; query strings and
/// fragments on discovered references are dropped, so the engine sees each
/// link in the same shape the deduplication key is derived from.
///
/// # Arguments
///
/// * `html` - The HTML content to extract from
/// * `page_url` - The URL the page was fetched from, used as the
///   resolution base
///
/// # Returns
///
/// A `PageRecord` for the page. Fields the document does not provide are
/// empty, including when `page_url` itself cannot be parsed.
pub fn extract_page_data(html: &str, page_url: &str) -> PageRecord {
    let base = match Url::parse(page_url) {
        Ok(url) => url,
        Err(_) => {
            return PageRecord {
                url: page_url.to_string(),
                ..PageRecord::default()
            }
        }
    };

    let document = Html::parse_document(html);

    PageRecord {
        url: page_url.to_string(),
        heading: first_heading(&document),
        first_paragraph: first_paragraph(&document),
        outgoing_links: collect_references(&document, "a[href]", "href", &base),
        image_urls: collect_references(&document, "img[src]", "src", &base),
    }
}

/// Extracts the text of the first h1 element in document order
fn first_heading(document: &Html) -> String {
    let Ok(selector) = Selector::parse("h1") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Extracts the text of the first paragraph
///
/// A paragraph inside `<main>` wins over any paragraph elsewhere. When the
/// document has a `<main>` region without paragraphs, the first paragraph
/// anywhere in the document is used instead.
fn first_paragraph(document: &Html) -> String {
    if let Ok(main_selector) = Selector::parse("main p") {
        if let Some(element) = document.select(&main_selector).next() {
            return element_text(element);
        }
    }

    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Collects resolved URL references for every element matching `selector`
///
/// Keeps document order and duplicates. References that cannot be resolved
/// to a host (invalid syntax, mailto:, javascript:) are skipped.
fn collect_references(document: &Html, selector: &str, attribute: &str, base: &Url) -> Vec<String> {
    let mut references = Vec::new();

    let Ok(selector) = Selector::parse(selector) else {
        return references;
    };

    for element in document.select(&selector) {
        if let Some(value) = element.value().attr(attribute) {
            if let Some(resolved) = resolve_reference(value, base) {
                references.push(resolved);
            }
        }
    }

    references
}

/// Resolves a raw href/src against the page URL
///
/// The result is rendered as `scheme://host/path` (plus a non-default
/// port). Query and fragment are discarded.
fn resolve_reference(reference: &str, base: &Url) -> Option<String> {
    let resolved = base.join(reference.trim()).ok()?;
    let host = resolved.host_str()?;

    let rendered = match resolved.port() {
        Some(port) => format!("{}://{}:{}{}", resolved.scheme(), host, port, resolved.path()),
        None => format!("{}://{}{}", resolved.scheme(), host, resolved.path()),
    };

    Some(rendered)
}

/// Concatenated, trimmed text content of an element
fn element_text(element: scraper::ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_URL: &str = "https://example.com/page";

    #[test]
    fn test_first_heading() {
        let html = "<html><body><h1>Test Title</h1></body></html>";
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.heading, "Test Title");
    }

    #[test]
    fn test_h2_is_not_a_heading() {
        let html = "<html><body><h2>Test Title</h2></body></html>";
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.heading, "");
    }

    #[test]
    fn test_nested_heading() {
        let html = "<html><body><div><h1>Test Title</h1></div></body></html>";
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.heading, "Test Title");
    }

    #[test]
    fn test_first_of_multiple_headings() {
        let html = "<html><body><h1>First</h1><h1>Second</h1></body></html>";
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.heading, "First");
    }

    #[test]
    fn test_paragraph_inside_main_wins() {
        let html = r#"<html><body>
            <p>Outside paragraph.</p>
            <main>
                <p>Main paragraph.</p>
                <p>Second paragraph.</p>
            </main>
        </body></html>"#;
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.first_paragraph, "Main paragraph.");
    }

    #[test]
    fn test_paragraph_fallback_without_main() {
        let html = r#"<html><body>
            <p>Outside paragraph.</p>
        </body></html>"#;
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.first_paragraph, "Outside paragraph.");
    }

    #[test]
    fn test_paragraph_fallback_when_main_has_none() {
        let html = r#"<html><body>
            <p>Outside paragraph.</p>
            <main><div>No paragraphs here</div></main>
        </body></html>"#;
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.first_paragraph, "Outside paragraph.");
    }

    #[test]
    fn test_no_paragraph_yields_empty() {
        let html = "<html><body><h1>Only a heading</h1></body></html>";
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.first_paragraph, "");
    }

    #[test]
    fn test_absolute_link() {
        let html = r#"<html><body><a href="https://example.com/other"><span>Other</span></a></body></html>"#;
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.outgoing_links, vec!["https://example.com/other"]);
    }

    #[test]
    fn test_relative_link_resolved() {
        let html = r#"<html><body><a href="/other">Other</a></body></html>"#;
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.outgoing_links, vec!["https://example.com/other"]);
    }

    #[test]
    fn test_offsite_link_kept_in_record() {
        let html = r#"<html><body><a href="https://other.example.net/page">Away</a></body></html>"#;
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(
            record.outgoing_links,
            vec!["https://other.example.net/page"]
        );
    }

    #[test]
    fn test_link_query_and_fragment_dropped() {
        let html = r#"<html><body><a href="/other?page=2#section">Other</a></body></html>"#;
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.outgoing_links, vec!["https://example.com/other"]);
    }

    #[test]
    fn test_duplicate_links_kept_in_order() {
        let html = r#"<html><body>
            <a href="/a">A</a>
            <a href="/b">B</a>
            <a href="/a">A again</a>
        </body></html>"#;
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(
            record.outgoing_links,
            vec![
                "https://example.com/a",
                "https://example.com/b",
                "https://example.com/a",
            ]
        );
    }

    #[test]
    fn test_hostless_references_skipped() {
        let html = r#"<html><body>
            <a href="mailto:someone@example.com">Mail</a>
            <a href="/kept">Kept</a>
        </body></html>"#;
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.outgoing_links, vec!["https://example.com/kept"]);
    }

    #[test]
    fn test_relative_image_resolved() {
        let html = r#"<html><body><img src="/logo.png" alt="Logo"></body></html>"#;
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.image_urls, vec!["https://example.com/logo.png"]);
    }

    #[test]
    fn test_absolute_image_kept() {
        let html = r#"<html><body><img src="https://cdn.example.com/logo.png"></body></html>"#;
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.image_urls, vec!["https://cdn.example.com/logo.png"]);
    }

    #[test]
    fn test_full_page() {
        let html = r#"<html><body>
            <h1>Test Title</h1>
            <p>This is the first paragraph.</p>
            <a href="/link1">Link 1</a>
            <img src="/image1.jpg" alt="Image 1">
        </body></html>"#;

        let record = extract_page_data(html, "https://example.com");

        assert_eq!(
            record,
            PageRecord {
                url: "https://example.com".to_string(),
                heading: "Test Title".to_string(),
                first_paragraph: "This is the first paragraph.".to_string(),
                outgoing_links: vec!["https://example.com/link1".to_string()],
                image_urls: vec!["https://example.com/image1.jpg".to_string()],
            }
        );
    }

    #[test]
    fn test_malformed_html_degrades_to_empty_fields() {
        let html = "<h1>Unclosed <p>and <a tangled";
        let record = extract_page_data(html, PAGE_URL);
        assert_eq!(record.url, PAGE_URL);
        assert!(record.outgoing_links.is_empty());
        assert!(record.image_urls.is_empty());
    }

    #[test]
    fn test_unparseable_page_url() {
        let record = extract_page_data("<h1>Hi</h1>", "not a url");
        assert_eq!(record.url, "not a url");
        assert_eq!(record.heading, "");
        assert!(record.outgoing_links.is_empty());
    }
}
