//! Error types for the analysis engine.
//!
//! Only conditions that must abort the whole analysis are represented here.
//! Per-file problems (a failed `stat`, a file that is not an image) are
//! handled where they are detected and never reach the caller.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// A directory could not be opened, or listing it failed part-way.
    #[error("could not read directory '{}'", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `.txt` file could not be opened or read for word counting.
    #[error("could not read text file '{}'", .path.display())]
    ReadText {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalyzeError {
    /// Path of the entry that caused the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ReadDir { path, .. } | Self::ReadText { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn display_names_path_and_keeps_source() {
        let err = AnalyzeError::ReadDir {
            path: PathBuf::from("a/b"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "could not read directory 'a/b'");
        assert_eq!(err.source().unwrap().to_string(), "gone");
        assert_eq!(err.path(), std::path::Path::new("a/b"));
    }
}
