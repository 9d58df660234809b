//! Path and text helpers shared by the walker and the word counter.
//!
//! Logical paths are real `Path`s relative to the traversal root (`.`,
//! `./docs`, `./docs/a.txt`), so names that are not valid UTF-8 stay
//! distinct. Only when a path ends up in a [`Report`](crate::Report) is it
//! converted to a string with [`display_path`].

use std::path::Path;

/// Logical path of the traversal root.
pub const ROOT_PATH: &str = ".";

/// Parent recorded for the traversal root.
pub const NO_PARENT: &str = "";

/// Strip a single leading `./`, if present.
///
/// The root itself (`"."`) is returned unchanged.
pub fn clean_path(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

/// Report form of a logical path: lossy UTF-8 with the leading `./` removed.
pub fn display_path(path: &Path) -> String {
    clean_path(&path.to_string_lossy()).to_owned()
}

/// ASCII case-insensitive suffix check.
///
/// Works on bytes so multi-byte names never cause a char-boundary panic.
pub fn ends_with_ignore_case(s: &str, suffix: &str) -> bool {
    let (s, suffix) = (s.as_bytes(), suffix.as_bytes());
    s.len() >= suffix.len() && s[s.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
