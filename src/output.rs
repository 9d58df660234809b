//! Report rendering for the terminal.

use std::fmt;
use treestat_core::Report;

const RULE: &str = "--------------------------------------------------------------";

/// Render the report in the fixed text layout.
pub fn render_text(report: &Report) -> String {
    TextReport(report).to_string()
}

/// Displays a report in the fixed text layout.
///
/// Words are listed by count, vacant directories alphabetically, images
/// by pixel area. Paths are quoted verbatim.
pub struct TextReport<'a>(pub &'a Report);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Largest file:      \"{}\"", report.largest_file_path)?;
        writeln!(f, "Largest file size: {}", report.largest_file_size)?;
        writeln!(f, "Number of files:   {}", report.n_files)?;
        writeln!(f, "Number of dirs:    {}", report.n_dirs)?;
        writeln!(f, "Total file size:   {}", report.all_files_size)?;

        writeln!(f, "Most common words from .txt files:")?;
        for w in &report.most_common_words {
            writeln!(f, " - \"{}\" x {}", w.word, w.count)?;
        }

        writeln!(f, "Vacant directories:")?;
        for d in &report.vacant_dirs {
            writeln!(f, " - \"{d}\"")?;
        }

        writeln!(f, "Largest images:")?;
        for img in &report.largest_images {
            writeln!(f, " - \"{}\" {}x{}", img.path, img.width, img.height)?;
        }
        writeln!(f, "{RULE}")
    }
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
