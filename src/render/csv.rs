//! CSV rendering for balance reports
//!
//! Writes one header line and one line per report row, spreadsheet-compatible.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::report::BalanceReport;

/// Render a balance report as CSV
///
/// Columns: ACCOUNT, DESCRIPTION, DEBIT, CREDIT, BALANCE. Amounts are plain
/// decimals; descriptions are quoted when they contain delimiters.
pub fn render_csv<W: Write>(report: &BalanceReport, writer: &mut W) -> TallyResult<()> {
    writeln!(writer, "ACCOUNT,DESCRIPTION,DEBIT,CREDIT,BALANCE")
        .map_err(|e| TallyError::Render(e.to_string()))?;

    for row in &report.rows {
        writeln!(
            writer,
            "{},{},{},{},{}",
            row.account,
            escape_csv(&row.description),
            row.debit,
            row.credit,
            row.balance
        )
        .map_err(|e| TallyError::Render(e.to_string()))?;
    }

    Ok(())
}

/// Escape a CSV field value
///
/// Wraps the value in quotes if it contains commas, quotes, or newlines.
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, JournalEntry, Money, OutputFormat, Period, ReportSelection};

    fn sample_report() -> BalanceReport {
        let accounts = vec![Account::new(100, "Cash"), Account::new(200, "Revenue")];
        let jan = Period::parse("2023-01").unwrap();
        let entries = vec![
            JournalEntry::new(100, jan, Money::from_cents(5000), Money::zero()),
            JournalEntry::new(200, jan, Money::zero(), Money::from_cents(5000)),
        ];
        BalanceReport::compute(
            &accounts,
            &entries,
            &ReportSelection::with_format(OutputFormat::Csv),
        )
    }

    #[test]
    fn test_render_csv() {
        let mut out = Vec::new();
        render_csv(&sample_report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ACCOUNT,DESCRIPTION,DEBIT,CREDIT,BALANCE");
        assert_eq!(lines[1], "100,Cash,50.00,0.00,50.00");
        assert_eq!(lines[2], "200,Revenue,0.00,50.00,-50.00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("Cash"), "Cash");
        assert_eq!(escape_csv("Cash, petty"), "\"Cash, petty\"");
        assert_eq!(escape_csv("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_render_empty_report() {
        let mut out = Vec::new();
        render_csv(&BalanceReport::empty(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "ACCOUNT,DESCRIPTION,DEBIT,CREDIT,BALANCE\n");
    }
}
