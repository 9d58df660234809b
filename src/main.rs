//! TreeStat: single-pass directory tree statistics.
//!
//! Thin binary entry point. All analysis logic lives in `treestat-core`;
//! this crate parses arguments, sets up logging and resource limits, and
//! prints the report.

mod cli;
mod limits;
mod output;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, ProberChoice};
use std::path::Path;
use treestat_core::paths::ROOT_PATH;
use treestat_core::probe::{HeaderProber, IdentifyProber, ImageProber};
use treestat_core::{Analyzer, Report};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    if cli.max_open_files > 0 {
        match limits::cap_open_files(cli.max_open_files) {
            Ok(applied) => tracing::debug!("open-file soft limit set to {applied}"),
            Err(err) => tracing::warn!("could not set open-file limit: {err}"),
        }
    }

    std::env::set_current_dir(&cli.dir)
        .with_context(|| format!("cannot enter directory '{}'", cli.dir.display()))?;

    let report = match cli.prober {
        ProberChoice::Identify => run(IdentifyProber::new(&cli.identify_cmd), cli.n),
        ProberChoice::Header => run(HeaderProber, cli.n),
    }
    .with_context(|| format!("analysis of '{}' failed", cli.dir.display()))?;

    if cli.json {
        println!("{}", output::render_json(&report)?);
    } else {
        print!("{}", output::render_text(&report));
    }
    Ok(())
}

/// Analyse the current directory with the given prober.
fn run<P: ImageProber>(prober: P, n: usize) -> Result<Report, treestat_core::AnalyzeError> {
    Analyzer::new(prober).analyze_dir(Path::new(ROOT_PATH), n)
}
