//! Output module for generating crawl reports
//!
//! This module serializes the final set of page records into the CSV
//! report the binary writes at the end of a run.

mod report;

pub use report::{write_report, LIST_SEPARATOR, REPORT_HEADER};
