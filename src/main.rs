//! sfdpdump - Decode SFDP dumps into readable text
//!
//! Reads a raw SFDP (Serial Flash Discoverable Parameters) dump from a file
//! or standard input and prints the SFDP header, every parameter header and
//! the decoded contents of the parameter tables.
//!
//! Problems with a single parameter table are reported on standard error and the
//! remaining tables are still printed. A dump that is too short or has no
//! valid signature ends the run with a non-zero exit status.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    if let Err(e) = commands::run_dump(cli.input_path(), &mut stdout, &mut stderr) {
        eprintln!("sfdpdump: {}", e);
        std::process::exit(e.exit_code());
    }
}
