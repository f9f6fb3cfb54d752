//! Journal entry model
//!
//! A journal entry is one recorded transaction line: it affects a single
//! account in a single period, with a debit amount and a credit amount.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::period::Period;

/// A single journal entry line
///
/// `account` references an [`super::Account`] by its numeric code. Amounts
/// are not constrained to be non-negative; reversal entries may carry
/// negative debits or credits and the balance arithmetic absorbs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Account code this entry posts to
    #[serde(rename = "ACCOUNT")]
    pub account: u32,

    /// Period the entry was recorded in
    #[serde(rename = "PERIOD")]
    pub period: Period,

    /// Debit amount
    #[serde(rename = "DEBIT")]
    pub debit: Money,

    /// Credit amount
    #[serde(rename = "CREDIT")]
    pub credit: Money,
}

impl JournalEntry {
    /// Create a new journal entry
    pub fn new(account: u32, period: Period, debit: Money, credit: Money) -> Self {
        Self {
            account,
            period,
            debit,
            credit,
        }
    }
}
