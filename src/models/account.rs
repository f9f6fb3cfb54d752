//! Account model
//!
//! Represents ledger accounts from a chart of accounts (Cash, Revenue, etc.)

use serde::{Deserialize, Serialize};
use std::fmt;

/// A ledger account
///
/// Accounts are identified by a numeric code from the chart of accounts and
/// carry a human-readable label. The code is unique within a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Numeric account code (e.g., 1000 for Cash)
    #[serde(rename = "ACCOUNT")]
    pub number: u32,

    /// Display label (e.g., "Cash")
    #[serde(rename = "LABEL")]
    pub label: String,
}

impl Account {
    /// Create a new account
    pub fn new(number: u32, label: impl Into<String>) -> Self {
        Self {
            number,
            label: label.into(),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.label)
    }
}
