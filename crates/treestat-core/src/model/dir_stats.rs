//! Per-subtree statistics accumulated by one walker call.
//!
//! Each recursive call owns a fresh `DirStats`, fills it from the
//! directory's own entries, folds every child's result in with
//! [`DirStats::absorb`], and hands it back to its caller by value.

use super::image::ImageInfo;

/// The largest file seen so far in a subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargestFile {
    /// Normalised path relative to the traversal root.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
}

/// Statistics for one directory and everything beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirStats {
    /// `None` until a file with successful metadata has been seen.
    pub largest: Option<LargestFile>,
    /// Regular files anywhere in the subtree.
    pub file_count: u64,
    /// Directories in the subtree, including this one.
    pub directory_count: u64,
    /// Sum of the sizes of all files whose metadata lookup succeeded.
    pub total_file_bytes: u64,
    /// Images found in the subtree, in discovery order.
    pub images: Vec<ImageInfo>,
}

impl Default for DirStats {
    fn default() -> Self {
        Self::new()
    }
}

impl DirStats {
    /// Stats for a directory that has not been read yet. Counts itself.
    pub fn new() -> Self {
        Self {
            largest: None,
            file_count: 0,
            directory_count: 1,
            total_file_bytes: 0,
            images: Vec::new(),
        }
    }

    /// Account for one regular file's size.
    ///
    /// The file only replaces the current largest when it is strictly
    /// larger, so among equal sizes the first one seen wins. Since
    /// directories are listed in filesystem order, which file that is
    /// among ties is unspecified.
    pub fn record_file_size(&mut self, path: &str, size: u64) {
        self.total_file_bytes += size;
        if self.largest.as_ref().map_or(true, |l| size > l.size) {
            self.largest = Some(LargestFile {
                path: path.to_owned(),
                size,
            });
        }
    }

    /// Fold a child directory's stats into this one.
    ///
    /// The child's largest file only wins when strictly larger than the
    /// current one.
    pub fn absorb(&mut self, child: DirStats) {
        if let Some(child_largest) = child.largest {
            if self
                .largest
                .as_ref()
                .map_or(true, |l| child_largest.size > l.size)
            {
                self.largest = Some(child_largest);
            }
        }
        self.file_count += child.file_count;
        self.directory_count += child.directory_count;
        self.total_file_bytes += child.total_file_bytes;
        self.images.extend(child.images);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dimensions;

    fn image(path: &str) -> ImageInfo {
        ImageInfo::new(path, Dimensions::new(1, 1).unwrap())
    }

    #[test]
    fn new_counts_itself() {
        let stats = DirStats::new();
        assert_eq!(stats.directory_count, 1);
        assert_eq!(stats.file_count, 0);
        assert!(stats.largest.is_none());
    }

    /// A zero-byte file still beats "unset".
    #[test]
    fn empty_file_becomes_largest() {
        let mut stats = DirStats::new();
        stats.record_file_size("empty.bin", 0);
        assert_eq!(stats.largest.as_ref().unwrap().path, "empty.bin");
        assert_eq!(stats.largest.as_ref().unwrap().size, 0);
    }

    #[test]
    fn record_keeps_first_of_equal_sizes() {
        let mut stats = DirStats::new();
        stats.record_file_size("first", 10);
        stats.record_file_size("second", 10);
        stats.record_file_size("small", 3);
        assert_eq!(stats.largest.unwrap().path, "first");
        assert_eq!(stats.total_file_bytes, 23);
    }

    #[test]
    fn absorb_sums_counts_and_concatenates_images() {
        let mut parent = DirStats::new();
        parent.file_count = 2;
        parent.total_file_bytes = 30;
        parent.images.push(image("p.png"));

        let mut child = DirStats::new();
        child.directory_count = 3;
        child.file_count = 4;
        child.total_file_bytes = 70;
        child.images.push(image("c1.png"));
        child.images.push(image("c2.png"));

        parent.absorb(child);

        assert_eq!(parent.directory_count, 4);
        assert_eq!(parent.file_count, 6);
        assert_eq!(parent.total_file_bytes, 100);
        let paths: Vec<_> = parent.images.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, ["p.png", "c1.png", "c2.png"]);
    }

    #[test]
    fn absorb_takes_strictly_larger_child_file() {
        let mut parent = DirStats::new();
        parent.record_file_size("mine", 50);

        let mut tie = DirStats::new();
        tie.record_file_size("tie", 50);
        parent.absorb(tie);
        assert_eq!(parent.largest.as_ref().unwrap().path, "mine");

        let mut bigger = DirStats::new();
        bigger.record_file_size("sub/big", 51);
        parent.absorb(bigger);
        assert_eq!(parent.largest.as_ref().unwrap().path, "sub/big");
    }

    #[test]
    fn absorb_empty_child_keeps_parent_largest() {
        let mut parent = DirStats::new();
        parent.absorb(DirStats::new());
        assert!(parent.largest.is_none());

        parent.record_file_size("a", 1);
        parent.absorb(DirStats::new());
        assert_eq!(parent.largest.unwrap().path, "a");
    }
}
