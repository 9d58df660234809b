//! Recursive depth-first directory walker.
//!
//! Visits every entry under the root exactly once and returns the root's
//! [`DirStats`]. Along the way it fills the [`TraversalContext`] (parent
//! links, per-directory subtree file counts, word frequencies) that the
//! vacancy resolver and word ranking consume after the walk.
//!
//! Entries are classified with `stat` semantics: symlinks are followed and
//! count as whatever they point at. Anything that is neither a regular file
//! nor a directory (sockets, devices, dangling links) is skipped. There is
//! no cycle detection.
//!
//! Recursion depth equals tree depth, and only the directories on the
//! current path hold an open handle at any time.

use super::TraversalContext;
use crate::error::AnalyzeError;
use crate::model::DirStats;
use crate::paths::{display_path, ends_with_ignore_case, NO_PARENT, ROOT_PATH};
use crate::probe::{probe_image, ImageProber};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Files whose path ends with this (any case) are fed to the word counter.
pub const TEXT_SUFFIX: &str = ".txt";

/// One walk over one tree. Consumed by [`Walker::run`].
pub struct Walker<'p, P: ImageProber + ?Sized> {
    root: PathBuf,
    prober: &'p P,
    ctx: TraversalContext,
}

impl<'p, P: ImageProber + ?Sized> Walker<'p, P> {
    pub fn new(root: impl Into<PathBuf>, prober: &'p P) -> Self {
        Self {
            root: root.into(),
            prober,
            ctx: TraversalContext::new(),
        }
    }

    /// Walk the whole tree.
    ///
    /// Returns the root's stats and the filled traversal context. Any fatal
    /// error aborts the walk and no partial result is returned.
    pub fn run(mut self) -> Result<(DirStats, TraversalContext), AnalyzeError> {
        let root = self.root.clone();
        let stats = self.walk(Path::new(ROOT_PATH), &root, Path::new(NO_PARENT))?;
        debug!(
            "walk complete: {} files, {} dirs, {} distinct words",
            stats.file_count,
            stats.directory_count,
            self.ctx.words.len()
        );
        Ok((stats, self.ctx))
    }

    /// Walk one directory.
    ///
    /// `dir` is the logical path used for bookkeeping (and, once displayed,
    /// in reports); `dir_fs` is where it actually lives on disk.
    fn walk(
        &mut self,
        dir: &Path,
        dir_fs: &Path,
        parent: &Path,
    ) -> Result<DirStats, AnalyzeError> {
        let read_err = |source| AnalyzeError::ReadDir {
            path: dir_fs.to_path_buf(),
            source,
        };
        let entries = fs::read_dir(dir_fs).map_err(read_err)?;
        debug!("entering {}", dir.display());

        self.ctx.enter_dir(dir, parent);
        let mut stats = DirStats::new();

        for entry in entries {
            let entry = entry.map_err(read_err)?;
            let name = entry.file_name();
            let path = dir.join(&name);
            let path_fs = entry.path();

            let meta = match fs::metadata(&path_fs) {
                Ok(meta) => meta,
                Err(err) => {
                    warn!("skipping {}: {err}", path.display());
                    continue;
                }
            };

            if meta.is_file() {
                self.visit_file(dir, &path, &path_fs, meta.len(), &mut stats)?;
            } else if meta.is_dir() {
                let child = self.walk(&path, &path_fs, dir)?;
                // The vacancy check needs subtree totals, not direct counts.
                self.ctx.add_files(dir, child.file_count);
                stats.absorb(child);
            } else {
                debug!(
                    "skipping {}: not a regular file or directory",
                    path.display()
                );
            }
        }

        Ok(stats)
    }

    fn visit_file(
        &mut self,
        dir: &Path,
        path: &Path,
        path_fs: &Path,
        size: u64,
        stats: &mut DirStats,
    ) -> Result<(), AnalyzeError> {
        stats.file_count += 1;
        self.ctx.add_files(dir, 1);
        let shown = display_path(path);
        stats.record_file_size(&shown, size);

        if ends_with_ignore_case(&shown, TEXT_SUFFIX) {
            self.ctx.words.count_file(path_fs)?;
        }

        // Every file is probed regardless of extension.
        if let Some(image) = probe_image(self.prober, path_fs, &shown) {
            stats.images.push(image);
        }
        Ok(())
    }
}
