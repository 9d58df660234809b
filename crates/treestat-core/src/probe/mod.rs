//! Image metadata resolvers.
//!
//! Every regular file in the tree is offered to an [`ImageProber`]. Most
//! files are not images, so a prober never fails loudly: anything that
//! goes wrong means "not an image" and the walk carries on.
//!
//! Two resolvers are provided:
//! - [`IdentifyProber`] runs ImageMagick's `identify` as a subprocess.
//! - [`HeaderProber`] decodes only the image header in-process.

pub mod header;
pub mod identify;

pub use header::HeaderProber;
pub use identify::IdentifyProber;

use crate::model::{Dimensions, ImageInfo};
use std::path::Path;
use tracing::trace;

/// Resolve the pixel dimensions of a file, if it is an image.
pub trait ImageProber {
    fn dimensions(&self, path: &Path) -> Option<Dimensions>;
}

impl<F> ImageProber for F
where
    F: Fn(&Path) -> Option<Dimensions>,
{
    fn dimensions(&self, path: &Path) -> Option<Dimensions> {
        self(path)
    }
}

/// Probe `fs_path` and, on success, record it under `report_path`
/// (already normalised with [`display_path`](crate::paths::display_path)).
pub fn probe_image<P: ImageProber + ?Sized>(
    prober: &P,
    fs_path: &Path,
    report_path: &str,
) -> Option<ImageInfo> {
    let dims = prober.dimensions(fs_path)?;
    trace!("image {} is {}x{}", report_path, dims.width, dims.height);
    Some(ImageInfo::new(report_path, dims))
}
