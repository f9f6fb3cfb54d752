use anyhow::Result;
use clap::{Parser, Subcommand};

use tally_cli::cli::{handle_report_command, ReportArgs};

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based account balance report tool",
    long_about = "Tally derives per-account balance summaries from a chart of \
                  accounts and a journal. Filter by account range and period \
                  range, and render the result as CSV or an HTML table."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a balance report from CSV inputs
    #[command(alias = "balance")]
    Report(ReportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Report(args)) => handle_report_command(args)?,
        None => {
            println!("Tally - account balance reports from the command line");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally report --help' to see report options.");
        }
    }

    Ok(())
}
