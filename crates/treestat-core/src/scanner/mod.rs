//! Scanner module: the single-threaded, depth-first directory walk.
//!
//! One [`Walker`] call per directory returns that subtree's
//! [`DirStats`](crate::model::DirStats) by value. Tree-wide bookkeeping
//! that is only meaningful once the whole walk has finished lives in a
//! [`TraversalContext`] owned by the walker and handed back at the end.

pub mod walker;
pub mod words;

pub use walker::Walker;
pub use words::{WordTable, MIN_WORD_LEN};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// State shared by every recursive call of one walk.
///
/// Only one thread ever touches this; a parallel walker would have to shard
/// or lock these maps, and vacancy resolution must still wait for the whole
/// walk to complete.
#[derive(Debug, Default)]
pub struct TraversalContext {
    /// Directory logical path to its parent's logical path.
    /// The root maps to [`NO_PARENT`](crate::paths::NO_PARENT).
    pub parent_of: HashMap<PathBuf, PathBuf>,
    /// Directory logical path to the number of files in its subtree.
    ///
    /// Starts at zero when the directory is entered, gains one per direct
    /// file, and gains each child directory's recursive file count when that
    /// child finishes.
    pub file_count_of: HashMap<PathBuf, u64>,
    /// Word frequencies across every `.txt` file seen.
    pub words: WordTable,
}

impl TraversalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory the moment the walker enters it.
    pub(crate) fn enter_dir(&mut self, dir: &Path, parent: &Path) {
        self.parent_of.insert(dir.to_path_buf(), parent.to_path_buf());
        self.file_count_of.insert(dir.to_path_buf(), 0);
    }

    /// Add `n` files to a directory's subtree total.
    pub(crate) fn add_files(&mut self, dir: &Path, n: u64) {
        *self.file_count_of.entry(dir.to_path_buf()).or_insert(0) += n;
    }
}
