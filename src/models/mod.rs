//! Core data models for Tally
//!
//! This module contains the data structures that represent the accounting
//! domain: accounts, journal entries, periods, and the user's report
//! selection.

pub mod account;
pub mod journal;
pub mod money;
pub mod period;
pub mod selection;

pub use account::Account;
pub use journal::JournalEntry;
pub use money::Money;
pub use period::Period;
pub use selection::{OutputFormat, ReportSelection};
