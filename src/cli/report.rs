//! CLI command for generating balance reports
//!
//! Bridges clap argument parsing with the report pipeline: loads the CSV
//! inputs, builds a selection from the flags, computes the report, and
//! writes the rendered output to stdout or a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{TallyError, TallyResult};
use crate::load::{load_accounts, load_journal_entries};
use crate::models::{OutputFormat, Period, ReportSelection};
use crate::render;
use crate::report::BalanceReport;

/// Arguments for the `report` command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the chart of accounts CSV (header: ACCOUNT,LABEL)
    #[arg(short, long)]
    pub accounts: PathBuf,

    /// Path to the journal CSV (header: ACCOUNT,PERIOD,DEBIT,CREDIT)
    #[arg(short, long)]
    pub journal: PathBuf,

    /// Output format (csv or html)
    #[arg(short, long)]
    pub format: String,

    /// Lowest account code to include (inclusive)
    #[arg(long)]
    pub start_account: Option<String>,

    /// Highest account code to include (inclusive)
    #[arg(long)]
    pub end_account: Option<String>,

    /// Earliest period to include (inclusive, "2023-01" or "2023-01-15")
    #[arg(long)]
    pub start_period: Option<String>,

    /// Latest period to include (inclusive)
    #[arg(long)]
    pub end_period: Option<String>,

    /// Write the rendered report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the totals/range summary header
    #[arg(long)]
    pub no_summary: bool,
}

/// Handle the `report` command
pub fn handle_report_command(args: ReportArgs) -> TallyResult<()> {
    let format = OutputFormat::parse(&args.format)
        .ok_or_else(|| TallyError::Validation(format!("unknown format: {}", args.format)))?;

    let accounts = load_accounts(&args.accounts)?;
    let entries = load_journal_entries(&args.journal)?;

    let selection = build_selection(&args, format);
    let report = BalanceReport::compute(&accounts, &entries, &selection);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| TallyError::Io(format!("{}: {}", path.display(), e)))?;
            let mut writer = BufWriter::new(file);
            write_report(&report, &selection, !args.no_summary, &mut writer)?;
            println!("Report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_report(&report, &selection, !args.no_summary, &mut writer)?;
        }
    }

    Ok(())
}

/// Build a selection from the raw flag values
///
/// Bounds that fail to parse behave as absent, widening to the full range of
/// the data; they never abort the report.
fn build_selection(args: &ReportArgs, format: OutputFormat) -> ReportSelection {
    ReportSelection {
        start_account: args.start_account.as_deref().and_then(parse_account_bound),
        end_account: args.end_account.as_deref().and_then(parse_account_bound),
        start_period: args.start_period.as_deref().and_then(parse_period_bound),
        end_period: args.end_period.as_deref().and_then(parse_period_bound),
        format,
    }
}

fn parse_account_bound(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

fn parse_period_bound(raw: &str) -> Option<Period> {
    Period::parse(raw).ok()
}

fn write_report<W: Write>(
    report: &BalanceReport,
    selection: &ReportSelection,
    summary: bool,
    writer: &mut W,
) -> TallyResult<()> {
    if summary {
        writeln!(writer, "{}", render::format_summary(report, selection))
            .map_err(|e| TallyError::Render(e.to_string()))?;
    }
    render::render(report, selection.format, writer)
}
