//! Summary header for balance reports
//!
//! Formats the totals line shown above a rendered report: grand totals plus
//! the effective account and period range, with `*` standing for an
//! unbounded end.

use crate::models::ReportSelection;
use crate::report::BalanceReport;

/// Format the report summary header
///
/// Example output:
/// `Total Debit: 50.00 Total Credit: 50.00\nBalance from account 100 to * from period 2023-01-01 to *`
pub fn format_summary(report: &BalanceReport, selection: &ReportSelection) -> String {
    format!(
        "Total Debit: {} Total Credit: {}\nBalance from account {} to {} from period {} to {}",
        report.total_debit,
        report.total_credit,
        bound(selection.start_account.map(|a| a.to_string())),
        bound(selection.end_account.map(|a| a.to_string())),
        bound(selection.start_period.map(|p| p.to_string())),
        bound(selection.end_period.map(|p| p.to_string())),
    )
}

fn bound(value: Option<String>) -> String {
    value.unwrap_or_else(|| "*".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, JournalEntry, Money, OutputFormat, Period, ReportSelection};

    #[test]
    fn test_summary_with_unbounded_selection() {
        let accounts = vec![Account::new(100, "Cash")];
        let jan = Period::parse("2023-01").unwrap();
        let entries = vec![JournalEntry::new(
            100,
            jan,
            Money::from_cents(5000),
            Money::zero(),
        )];
        let selection = ReportSelection::with_format(OutputFormat::Csv);
        let report = BalanceReport::compute(&accounts, &entries, &selection);

        let summary = format_summary(&report, &selection);
        assert!(summary.starts_with("Total Debit: 50.00 Total Credit: 0.00"));
        assert!(summary.contains("from account * to *"));
        assert!(summary.contains("from period * to *"));
    }

    #[test]
    fn test_summary_with_bounds() {
        let mut selection = ReportSelection::with_format(OutputFormat::Csv);
        selection.start_account = Some(100);
        selection.end_period = Some(Period::parse("2023-02").unwrap());

        let summary = format_summary(&BalanceReport::empty(), &selection);
        assert!(summary.contains("from account 100 to *"));
        assert!(summary.contains("from period * to 2023-02-01"));
    }
}
