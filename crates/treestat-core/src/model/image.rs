//! Image records produced by the probers.

use serde::Serialize;

/// Width and height reported by an image prober. Both are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u64,
    pub height: u64,
}

impl Dimensions {
    /// Build a `Dimensions`, rejecting zero-sized images.
    pub fn new(width: u64, height: u64) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }
}

/// A file that a prober recognised as an image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ImageInfo {
    /// Normalised path relative to the traversal root.
    pub path: String,
    pub width: u64,
    pub height: u64,
}

impl ImageInfo {
    pub fn new(path: impl Into<String>, dims: Dimensions) -> Self {
        Self {
            path: path.into(),
            width: dims.width,
            height: dims.height,
        }
    }

    /// Pixel area used for ranking. Saturates rather than wrapping on
    /// absurd header values.
    #[inline]
    pub fn pixels(&self) -> u64 {
        self.width.saturating_mul(self.height)
    }
}
