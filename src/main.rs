use std::path::PathBuf;

use clap::Parser;
use log::error;

/// Reconcile a financial ledger against a counter-party tier lookup and
/// write a tiered summary report with per-group totals.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to the first dataset in csv format, containing financial data.
    dataset1_path: PathBuf,
    /// Path to the second dataset in csv format, containing tier data.
    dataset2_path: PathBuf,
    /// Path to the output file.
    #[arg(long = "output_path", default_value = "result.csv")]
    output_path: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = reckoner::run(&args.dataset1_path, &args.dataset2_path, &args.output_path) {
        error!("{err}");
        std::process::exit(1);
    }
}
