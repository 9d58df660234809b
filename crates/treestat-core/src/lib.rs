//! TreeStat Core: single-pass directory traversal and statistics.
//!
//! This crate contains all analysis logic with no CLI dependencies.
//! The binary crate parses arguments, changes into the target directory,
//! and calls [`analyze`] (or an [`Analyzer`] with a chosen prober).
//!
//! # Modules
//!
//! - [`model`]: Per-subtree statistics, image and word records, the final report.
//! - [`scanner`]: Recursive depth-first walker, traversal context, word counter.
//! - [`probe`]: Image metadata resolvers (external `identify`, in-process header decode).
//! - [`analysis`]: Top-N ranking, vacant-directory resolution, report assembly.
//! - [`paths`]: Path normalisation and suffix matching helpers.

pub mod analysis;
pub mod error;
pub mod model;
pub mod paths;
pub mod probe;
pub mod scanner;

pub use analysis::{analyze, Analyzer};
pub use error::AnalyzeError;
pub use model::Report;
