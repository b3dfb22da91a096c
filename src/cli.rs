//! CLI argument parsing

use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sfdpdump")]
#[command(author, version, about = "Parse SFDP to readable format", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// SFDP dump to decode (reads standard input if omitted or "-")
    #[arg(value_name = "SFDP_DUMP")]
    pub input: Option<PathBuf>,
}

impl Cli {
    /// Input file, `None` for standard input
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_path() {
        let cli = Cli::parse_from(["sfdpdump"]);
        assert_eq!(cli.input_path(), None);

        let cli = Cli::parse_from(["sfdpdump", "-"]);
        assert_eq!(cli.input_path(), None);

        let cli = Cli::parse_from(["sfdpdump", "dump.bin"]);
        assert_eq!(cli.input_path(), Some(Path::new("dump.bin")));
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(Cli::parse_from(["sfdpdump"]).log_filter(), "warn");
        assert_eq!(Cli::parse_from(["sfdpdump", "-v"]).log_filter(), "info");
        assert_eq!(Cli::parse_from(["sfdpdump", "-vv", "x"]).log_filter(), "debug");
        assert_eq!(Cli::parse_from(["sfdpdump", "-vvvv"]).log_filter(), "trace");
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
