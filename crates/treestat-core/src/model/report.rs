//! The final, immutable result of an analysis run.
//!
//! Field names and ordering guarantees are part of the public contract:
//! the CLI prints them verbatim and `--json` serialises them as-is.

use super::dir_stats::DirStats;
use super::image::ImageInfo;
use compact_str::CompactString;
use serde::Serialize;

/// Size reported when the tree contains no files.
pub const UNSET_SIZE: i64 = -1;

/// A word and how many times it appeared across all `.txt` files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: CompactString,
    pub count: u64,
}

impl WordCount {
    pub fn new(word: impl Into<CompactString>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Aggregate statistics for a whole directory tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Path of the largest file, empty when there are no files.
    pub largest_file_path: String,
    /// Size in bytes of the largest file, [`UNSET_SIZE`] when there are no files.
    pub largest_file_size: i64,
    /// Regular files in the tree.
    pub n_files: u64,
    /// Directories in the tree, including the root.
    pub n_dirs: u64,
    /// Cumulative size of all files in bytes.
    pub all_files_size: u64,
    /// Most frequent words: count descending, then word ascending.
    pub most_common_words: Vec<WordCount>,
    /// Largest images: pixel area descending, then path ascending.
    pub largest_images: Vec<ImageInfo>,
    /// Top-level vacant directories, sorted ascending.
    pub vacant_dirs: Vec<String>,
}

impl Report {
    /// Combine the root's stats with the ranked lists.
    ///
    /// `root.images` is ignored; the caller passes the already-ranked
    /// `largest_images`.
    pub fn from_parts(
        root: DirStats,
        most_common_words: Vec<WordCount>,
        largest_images: Vec<ImageInfo>,
        vacant_dirs: Vec<String>,
    ) -> Self {
        let (largest_file_path, largest_file_size) = match root.largest {
            Some(l) => (l.path, i64::try_from(l.size).unwrap_or(i64::MAX)),
            None => (String::new(), UNSET_SIZE),
        };
        Self {
            largest_file_path,
            largest_file_size,
            n_files: root.file_count,
            n_dirs: root.directory_count,
            all_files_size: root.total_file_bytes,
            most_common_words,
            largest_images,
            vacant_dirs,
        }
    }
}
