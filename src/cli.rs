//! Command-line arguments.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use treestat_core::probe::identify::DEFAULT_IDENTIFY_PROGRAM;

/// Default soft cap on open file descriptors.
pub const DEFAULT_MAX_OPEN_FILES: u64 = 256;

#[derive(Parser, Debug)]
#[command(
    name = "treestat",
    version,
    about = "Single-pass directory tree statistics"
)]
pub struct Cli {
    /// How many words and images to report.
    #[arg(value_name = "N")]
    pub n: usize,

    /// Directory to analyse.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Print the report as JSON instead of text.
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// How to read image dimensions.
    #[arg(long, value_enum, default_value_t = ProberChoice::Identify)]
    pub prober: ProberChoice,

    /// Program used by the `identify` prober.
    #[arg(long = "identify-cmd", value_name = "PROGRAM", default_value = DEFAULT_IDENTIFY_PROGRAM)]
    pub identify_cmd: String,

    /// Soft limit on simultaneously open files (0 leaves it unchanged).
    #[arg(long = "max-open-files", default_value_t = DEFAULT_MAX_OPEN_FILES)]
    pub max_open_files: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProberChoice {
    /// Run ImageMagick `identify` on every file.
    Identify,
    /// Decode image headers in-process.
    Header,
}

impl Cli {
    /// Log level implied by `-v` flags. Warnings are always shown.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_n_and_dir() {
        let cli = Cli::try_parse_from(["treestat", "5", "/tmp"]).unwrap();
        assert_eq!(cli.n, 5);
        assert_eq!(cli.dir, PathBuf::from("/tmp"));
        assert!(!cli.json);
        assert_eq!(cli.prober, ProberChoice::Identify);
        assert_eq!(cli.identify_cmd, "identify");
        assert_eq!(cli.max_open_files, DEFAULT_MAX_OPEN_FILES);
        assert_eq!(cli.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn negative_n_is_rejected() {
        assert!(Cli::try_parse_from(["treestat", "-3", "."]).is_err());
    }

    #[test]
    fn missing_dir_is_rejected() {
        assert!(Cli::try_parse_from(["treestat", "5"]).is_err());
    }

    #[test]
    fn options_parse() {
        let cli = Cli::try_parse_from([
            "treestat",
            "--json",
            "--prober",
            "header",
            "--identify-cmd",
            "magick-identify",
            "--max-open-files",
            "0",
            "-vv",
            "10",
            "photos",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.prober, ProberChoice::Header);
        assert_eq!(cli.identify_cmd, "magick-identify");
        assert_eq!(cli.max_open_files, 0);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
        assert_eq!(cli.n, 10);
    }
}
