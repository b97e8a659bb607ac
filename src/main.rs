use clap::Parser;

use seq_gap::cli::Cli;
use seq_gap::commands::run_scan;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_scan(&cli));
}
