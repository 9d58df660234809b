//! Top-N ranking of words and images.
//!
//! Both orderings are total (ties fall back to the string key), so
//! results are deterministic regardless of traversal order.

use crate::model::{ImageInfo, WordCount};
use crate::scanner::WordTable;
use std::cmp::Ordering;

/// Count descending, then word ascending.
fn word_order(a: &WordCount, b: &WordCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Pixel area descending, then path ascending.
fn image_order(a: &ImageInfo, b: &ImageInfo) -> Ordering {
    b.pixels()
        .cmp(&a.pixels())
        .then_with(|| a.path.cmp(&b.path))
}

/// Keep the first `n` items of `items` under `order`, sorted.
///
/// Uses `select_nth_unstable_by` to bring the top `n` to the front in O(len)
/// and only sorts those. Asking for more than there are returns them all.
fn top_n<T, F>(mut items: Vec<T>, n: usize, order: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if n == 0 {
        return Vec::new();
    }
    if items.len() > n {
        items.select_nth_unstable_by(n - 1, &order);
        items.truncate(n);
    }
    items.sort_unstable_by(&order);
    items
}

/// The `n` most frequent words in `table`.
pub fn top_words(table: &WordTable, n: usize) -> Vec<WordCount> {
    let words: Vec<WordCount> = table
        .iter()
        .map(|(word, count)| WordCount::new(word.clone(), count))
        .collect();
    top_n(words, n, word_order)
}

/// The `n` largest images by pixel area.
pub fn top_images(images: Vec<ImageInfo>, n: usize) -> Vec<ImageInfo> {
    top_n(images, n, image_order)
}
