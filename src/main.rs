use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use scan_accounts::{logging, pipeline};

#[derive(Parser)]
#[command(name = "scan_accounts")]
#[command(about = "Extracts local user accounts from vulnerability-scanner CSV exports")]
#[command(version = "0.1.0")]
#[command(after_help = "Examples:
  scan_accounts scan_report.csv > accounts.csv
  scan_accounts scan_report.csv accounts.csv")]
struct Cli {
    /// Scanner export to read (CSV with 'IP' and 'Results' columns)
    input: PathBuf,
    /// Destination CSV (one 'IP,Username' row per account); standard output
    /// when omitted
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    logging::init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Missing arguments print the usage text and fail; --help and
            // --version stay successful.
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    match pipeline::run(&cli.input, cli.output.as_deref()) {
        Ok(_summary) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
