//! CSV loaders for accounting records
//!
//! Reads the chart of accounts and the journal from CSV files. Amounts appear
//! in the files as decimals ("50.00"), so records are parsed field by field
//! through [`Money::parse`] and [`Period::parse`] rather than serde-derived
//! deserialization.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, StringRecord};

use crate::error::{TallyError, TallyResult};
use crate::models::{Account, JournalEntry, Money, Period};

/// Load a chart of accounts from a CSV file
///
/// Expected header: `ACCOUNT,LABEL`.
pub fn load_accounts(path: &Path) -> TallyResult<Vec<Account>> {
    let file = File::open(path)
        .map_err(|e| TallyError::Load(format!("{}: {}", path.display(), e)))?;
    read_accounts(file, &path.display().to_string())
}

/// Load journal entries from a CSV file
///
/// Expected header: `ACCOUNT,PERIOD,DEBIT,CREDIT`.
pub fn load_journal_entries(path: &Path) -> TallyResult<Vec<JournalEntry>> {
    let file = File::open(path)
        .map_err(|e| TallyError::Load(format!("{}: {}", path.display(), e)))?;
    read_journal_entries(file, &path.display().to_string())
}

/// Read accounts from any CSV source
pub fn read_accounts<R: Read>(reader: R, source: &str) -> TallyResult<Vec<Account>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut accounts = Vec::new();

    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;
        // Header is row 1; data starts at row 2.
        let row = index + 2;

        let number = parse_account_number(&record, 0, source, row)?;
        let label = field(&record, 1, source, row)?.to_string();

        accounts.push(Account::new(number, label));
    }

    Ok(accounts)
}

/// Read journal entries from any CSV source
pub fn read_journal_entries<R: Read>(reader: R, source: &str) -> TallyResult<Vec<JournalEntry>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut entries = Vec::new();

    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row = index + 2;

        let account = parse_account_number(&record, 0, source, row)?;
        let period = Period::parse(field(&record, 1, source, row)?)
            .map_err(|e| TallyError::load_row(source, row, e.to_string()))?;
        let debit = Money::parse(field(&record, 2, source, row)?)
            .map_err(|e| TallyError::load_row(source, row, e.to_string()))?;
        let credit = Money::parse(field(&record, 3, source, row)?)
            .map_err(|e| TallyError::load_row(source, row, e.to_string()))?;

        entries.push(JournalEntry::new(account, period, debit, credit));
    }

    Ok(entries)
}

fn field<'r>(record: &'r StringRecord, index: usize, source: &str, row: usize) -> TallyResult<&'r str> {
    record
        .get(index)
        .map(str::trim)
        .ok_or_else(|| TallyError::load_row(source, row, format!("missing column {}", index + 1)))
}

fn parse_account_number(
    record: &StringRecord,
    index: usize,
    source: &str,
    row: usize,
) -> TallyResult<u32> {
    let raw = field(record, index, source, row)?;
    raw.parse()
        .map_err(|_| TallyError::load_row(source, row, format!("invalid account number: {}", raw)))
}
