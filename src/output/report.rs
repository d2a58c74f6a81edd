//! CSV report writer
//!
//! Emits one header row and one data row per registered page. The two list
//! fields are flattened with a separator that cannot occur inside a URL.

use crate::state::PageRecord;
use crate::ReportError;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Column names of the report, in order
pub const REPORT_HEADER: [&str; 5] = [
    "page_url",
    "h1",
    "first_paragraph",
    "outgoing_link_urls",
    "image_urls",
];

/// Separator used to flatten URL lists into a single CSV field
pub const LIST_SEPARATOR: &str = ";";

/// One row of the report
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    page_url: &'a str,
    h1: &'a str,
    first_paragraph: &'a str,
    outgoing_link_urls: String,
    image_urls: String,
}

impl<'a> ReportRow<'a> {
    fn from_record(record: &'a PageRecord) -> Self {
        Self {
            page_url: &record.url,
            h1: &record.heading,
            first_paragraph: &record.first_paragraph,
            outgoing_link_urls: record.outgoing_links.join(LIST_SEPARATOR),
            image_urls: record.image_urls.join(LIST_SEPARATOR),
        }
    }
}

/// Writes the crawl report as UTF-8 CSV
///
/// The header row is always written, even for an empty record set. Rows
/// appear in whatever order the map yields.
///
/// # Arguments
///
/// * `records` - The registered pages, keyed by normalized URL
/// * `path` - Destination file, created or truncated
///
/// # Returns
///
/// * `Ok(())` - Report written and flushed
/// * `Err(ReportError)` - File creation, serialization, or flush failed
pub fn write_report(records: &HashMap<String, PageRecord>, path: &Path) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(REPORT_HEADER)?;
    for record in records.values() {
        writer.serialize(ReportRow::from_record(record))?;
    }
    writer.flush()?;

    Ok(())
}
