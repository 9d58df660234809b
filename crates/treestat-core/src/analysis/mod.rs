//! Analysis: runs the walk and turns its output into a [`Report`].
//!
//! The walk itself lives in [`crate::scanner`]. Everything here happens
//! strictly after it finishes: ranking needs the complete word table and
//! image list, vacancy needs final subtree counts.

pub mod ranking;
pub mod vacancy;

pub use ranking::{top_images, top_words};
pub use vacancy::top_level_vacant_dirs;

use crate::error::AnalyzeError;
use crate::model::Report;
use crate::paths::ROOT_PATH;
use crate::probe::{IdentifyProber, ImageProber};
use crate::scanner::Walker;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Analyse the current working directory, probing images with `identify`.
///
/// `n` caps both the word list and the image list.
pub fn analyze(n: usize) -> Result<Report, AnalyzeError> {
    Analyzer::new(IdentifyProber::default()).analyze_dir(Path::new(ROOT_PATH), n)
}

/// Report builder parameterised over the image prober.
pub struct Analyzer<P: ImageProber> {
    prober: P,
}

impl<P: ImageProber> Analyzer<P> {
    pub fn new(prober: P) -> Self {
        Self { prober }
    }

    /// Analyse the tree under `root`.
    ///
    /// Reported paths are relative to `root`. Each call uses a fresh
    /// traversal context, so repeated calls on an unchanged tree give
    /// equal reports (up to the unspecified winner among equal-sized
    /// largest files).
    pub fn analyze_dir(&self, root: &Path, n: usize) -> Result<Report, AnalyzeError> {
        let start = Instant::now();
        info!("analysing {}", root.display());

        let (mut root_stats, ctx) = Walker::new(root, &self.prober).run()?;

        let most_common_words = top_words(&ctx.words, n);
        let largest_images = top_images(std::mem::take(&mut root_stats.images), n);
        let vacant_dirs = top_level_vacant_dirs(&ctx);

        let report =
            Report::from_parts(root_stats, most_common_words, largest_images, vacant_dirs);
        info!(
            "analysis complete: {} files, {} dirs, {} bytes in {:?}",
            report.n_files,
            report.n_dirs,
            report.all_files_size,
            start.elapsed()
        );
        Ok(report)
    }
}
