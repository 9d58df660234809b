//! Data model for a single analysis run.
//!
//! [`DirStats`] is the per-subtree accumulator returned by each recursive
//! walker call. [`Report`] is the immutable result handed to the caller.

pub mod dir_stats;
pub mod image;
pub mod report;

pub use dir_stats::{DirStats, LargestFile};
pub use image::{Dimensions, ImageInfo};
pub use report::{Report, WordCount};
