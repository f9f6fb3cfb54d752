//! Data loading module for Tally
//!
//! The core pipeline works on in-memory records; this module gets them there
//! from CSV files on disk.

pub mod csv;

pub use csv::{load_accounts, load_journal_entries, read_accounts, read_journal_entries};
