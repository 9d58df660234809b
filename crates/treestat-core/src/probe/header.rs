//! In-process image probing.
//!
//! Sniffs the format from the file's magic bytes (falling back to the
//! extension) and decodes only as much of the header as needed to learn
//! the dimensions. No subprocess, no locale-dependent parsing.

use super::ImageProber;
use crate::model::Dimensions;
use std::path::Path;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderProber;

impl ImageProber for HeaderProber {
    fn dimensions(&self, path: &Path) -> Option<Dimensions> {
        let reader = image::ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .ok()?;
        // Unknown formats are the common case (plain files), not worth logging.
        reader.format()?;
        match reader.into_dimensions() {
            Ok((width, height)) => Dimensions::new(u64::from(width), u64::from(height)),
            Err(err) => {
                trace!("header decode failed for {}: {err}", path.display());
                None
            }
        }
    }
}
