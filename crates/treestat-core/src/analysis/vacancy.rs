//! Vacant directory detection.
//!
//! A directory is vacant when its subtree holds no files. It is reported
//! only when its parent is not vacant, so a whole empty branch shows up as
//! its topmost directory alone. The traversal root's parent
//! ([`NO_PARENT`]) always counts as non-vacant, which lets an empty root be
//! reported.
//!
//! Must run after the walk has completed: the counts are only final once
//! every child has reported back.

use crate::paths::{display_path, NO_PARENT};
use crate::scanner::TraversalContext;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Count assumed for the root's pseudo-parent.
const ROOT_PARENT_FILE_COUNT: u64 = 1;

/// Top-level vacant directories, normalised and sorted ascending.
pub fn top_level_vacant_dirs(ctx: &TraversalContext) -> Vec<String> {
    let no_parent = Path::new(NO_PARENT);
    let mut counts: HashMap<&Path, u64> = ctx
        .file_count_of
        .iter()
        .map(|(dir, &n)| (dir.as_path(), n))
        .collect();
    counts.insert(no_parent, ROOT_PARENT_FILE_COUNT);

    let mut vacant: Vec<String> = ctx
        .file_count_of
        .iter()
        .filter(|&(_, &n)| n == 0)
        .filter(|&(dir, _)| {
            let parent = ctx.parent_of.get(dir).map_or(no_parent, PathBuf::as_path);
            counts.get(parent).copied().unwrap_or(0) > 0
        })
        .map(|(dir, _)| display_path(dir))
        .collect();

    vacant.sort_unstable();
    vacant
}
