//! Word frequency counting for `.txt` files.
//!
//! A word is a maximal run of ASCII letters, lower-cased. Only words of at
//! least [`MIN_WORD_LEN`] letters are counted. Files are streamed byte by
//! byte, so line breaks and punctuation are just separators.

use crate::error::AnalyzeError;
use compact_str::CompactString;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Shortest word that is counted.
pub const MIN_WORD_LEN: usize = 5;

/// Tree-wide word frequencies. Entries only ever grow.
#[derive(Debug, Default, Clone)]
pub struct WordTable {
    counts: HashMap<CompactString, u64>,
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the words in the file at `path`.
    ///
    /// Failing to open or read the file is fatal for the whole analysis.
    pub fn count_file(&mut self, path: &Path) -> Result<(), AnalyzeError> {
        let to_err = |source| AnalyzeError::ReadText {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(to_err)?;
        self.count_reader(BufReader::new(file)).map_err(to_err)
    }

    /// Count the words in any byte stream.
    pub fn count_reader<R: Read>(&mut self, reader: R) -> std::io::Result<()> {
        let mut word = CompactString::default();
        for byte in reader.bytes() {
            let byte = byte?;
            if byte.is_ascii_alphabetic() {
                word.push(char::from(byte.to_ascii_lowercase()));
            } else {
                self.flush(&mut word);
            }
        }
        // The last word may run right up to end of file.
        self.flush(&mut word);
        Ok(())
    }

    fn flush(&mut self, word: &mut CompactString) {
        if word.len() >= MIN_WORD_LEN {
            *self.counts.entry(word.clone()).or_insert(0) += 1;
        }
        word.clear();
    }

    /// Occurrences of `word` so far (0 when never seen).
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CompactString, u64)> {
        self.counts.iter().map(|(w, &c)| (w, c))
    }
}
