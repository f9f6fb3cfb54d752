//! Rendering module for Tally
//!
//! Serializes a computed balance report in the selected output format:
//! - CSV: one delimited line per row (spreadsheet-compatible)
//! - HTML: a table with a header row

pub mod csv;
pub mod html;
pub mod summary;

pub use csv::render_csv;
pub use html::render_html;
pub use summary::format_summary;

use std::io::Write;

use crate::error::TallyResult;
use crate::models::OutputFormat;
use crate::report::BalanceReport;

/// Render a report in the given format
///
/// `Unset` writes nothing; the match is exhaustive over the format variants.
pub fn render<W: Write>(
    report: &BalanceReport,
    format: OutputFormat,
    writer: &mut W,
) -> TallyResult<()> {
    match format {
        OutputFormat::Unset => Ok(()),
        OutputFormat::Csv => render_csv(report, writer),
        OutputFormat::Html => render_html(report, writer),
    }
}
