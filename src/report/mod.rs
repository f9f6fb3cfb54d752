//! Reports module for Tally
//!
//! Derives balance summaries from the raw accounting records.

pub mod balance;

pub use balance::{BalanceReport, BalanceRow};
