//! Balance Report
//!
//! Derives a per-account balance summary from accounts and journal entries,
//! filtered by the user's account range, period range, and output format.
//!
//! The computation is a pure five-stage pipeline: resolve the effective
//! account range, resolve the effective period range, filter accounts,
//! filter journal entries, then aggregate debit/credit/balance per account
//! and compute grand totals. No inputs are mutated and identical inputs
//! always produce an identical report.

use std::collections::HashMap;

use crate::models::{Account, JournalEntry, Money, Period, ReportSelection};

/// One line of a balance report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceRow {
    /// Account code
    pub account: u32,
    /// Account label
    pub description: String,
    /// Sum of debits posted to the account within the period range
    pub debit: Money,
    /// Sum of credits posted to the account within the period range
    pub credit: Money,
    /// Debits minus credits
    pub balance: Money,
}

/// A computed balance report
///
/// Rows follow the order of the filtered accounts; totals are sums over the
/// rows' debit and credit columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceReport {
    /// One row per account in the selected range
    pub rows: Vec<BalanceRow>,
    /// Sum of all rows' debits
    pub total_debit: Money,
    /// Sum of all rows' credits
    pub total_credit: Money,
}

impl BalanceReport {
    /// An empty report: no rows, zero totals
    ///
    /// Returned when there is nothing to display. This is not an error state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compute a balance report
    ///
    /// Returns the empty report when `accounts` or `entries` is empty or no
    /// output format has been selected. Range bounds missing from the
    /// selection default to the minimum/maximum values present in the data;
    /// the inputs do not need to be sorted. Both range filters are inclusive
    /// at both ends. Accounts with no matching entries still appear with
    /// zero sums.
    pub fn compute(
        accounts: &[Account],
        entries: &[JournalEntry],
        selection: &ReportSelection,
    ) -> Self {
        if accounts.is_empty() || entries.is_empty() || !selection.format.is_set() {
            return Self::empty();
        }

        let (start_account, end_account) = resolve_account_range(selection, accounts);
        let (start_period, end_period) = resolve_period_range(selection, entries);

        let filtered_accounts = accounts
            .iter()
            .filter(|a| a.number >= start_account && a.number <= end_account);

        // Index surviving entries by account so aggregation is a single pass
        // over the journal instead of a scan per account.
        let mut sums: HashMap<u32, (Money, Money)> = HashMap::new();
        for entry in entries {
            if entry.period >= start_period && entry.period <= end_period {
                let slot = sums
                    .entry(entry.account)
                    .or_insert((Money::zero(), Money::zero()));
                slot.0 += entry.debit;
                slot.1 += entry.credit;
            }
        }

        let rows: Vec<BalanceRow> = filtered_accounts
            .map(|account| {
                let (debit, credit) = sums
                    .get(&account.number)
                    .copied()
                    .unwrap_or((Money::zero(), Money::zero()));
                BalanceRow {
                    account: account.number,
                    description: account.label.clone(),
                    debit,
                    credit,
                    balance: debit - credit,
                }
            })
            .collect();

        let total_debit = rows.iter().map(|r| r.debit).sum();
        let total_credit = rows.iter().map(|r| r.credit).sum();

        Self {
            rows,
            total_debit,
            total_credit,
        }
    }

    /// Check whether the report has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Resolve the effective account range
///
/// Missing bounds widen to the minimum/maximum account code present. The
/// accounts slice is non-empty here, so the folds always produce a value.
fn resolve_account_range(selection: &ReportSelection, accounts: &[Account]) -> (u32, u32) {
    let min = accounts.iter().map(|a| a.number).min().unwrap_or(u32::MIN);
    let max = accounts.iter().map(|a| a.number).max().unwrap_or(u32::MAX);
    (
        selection.start_account.unwrap_or(min),
        selection.end_account.unwrap_or(max),
    )
}

/// Resolve the effective period range
///
/// Missing bounds widen to the earliest/latest period present. The entries
/// slice is non-empty here, so the folds always produce a value.
fn resolve_period_range(selection: &ReportSelection, entries: &[JournalEntry]) -> (Period, Period) {
    let earliest = entries.iter().map(|e| e.period).min();
    let latest = entries.iter().map(|e| e.period).max();
    (
        selection
            .start_period
            .or(earliest)
            .unwrap_or(Period::from_date(chrono::NaiveDate::MIN)),
        selection
            .end_period
            .or(latest)
            .unwrap_or(Period::from_date(chrono::NaiveDate::MAX)),
    )
}
