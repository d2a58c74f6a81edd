/// Metadata extracted from one successfully crawled page
///
/// Records are created once, at registration time, and never modified
/// afterwards. `outgoing_links` and `image_urls` keep document order and
/// keep duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRecord {
    /// The URL the page was fetched from, as discovered (not normalized)
    pub url: String,

    /// Text of the first top-level heading, empty when the page has none
    pub heading: String,

    /// Text of the first paragraph, preferring paragraphs inside `<main>`
    pub first_paragraph: String,

    /// Absolute URLs of every anchor on the page, in document order
    pub outgoing_links: Vec<String>,

    /// Absolute URLs of every image on the page, in document order
    pub image_urls: Vec<String>,
}
