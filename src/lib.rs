//! Tally - Terminal-based account balance report tool
//!
//! This library derives per-account balance summaries from a chart of
//! accounts and a journal, filtered by an account range, a period range,
//! and an output format.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, journal entries, periods, selection)
//! - `report`: The balance report pipeline
//! - `render`: CSV and HTML renderings of a computed report
//! - `load`: CSV loaders for the input records
//! - `cli`: Command handlers for the `tally` binary
//!
//! # Example
//!
//! ```rust
//! use tally_cli::models::{Account, JournalEntry, Money, OutputFormat, Period, ReportSelection};
//! use tally_cli::report::BalanceReport;
//!
//! let accounts = vec![Account::new(100, "Cash")];
//! let entries = vec![JournalEntry::new(
//!     100,
//!     Period::parse("2023-01").unwrap(),
//!     Money::from_cents(5000),
//!     Money::zero(),
//! )];
//! let selection = ReportSelection::with_format(OutputFormat::Csv);
//!
//! let report = BalanceReport::compute(&accounts, &entries, &selection);
//! assert_eq!(report.total_debit, Money::from_cents(5000));
//! ```

pub mod cli;
pub mod error;
pub mod load;
pub mod models;
pub mod render;
pub mod report;

pub use error::TallyError;
