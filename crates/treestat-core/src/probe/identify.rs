//! Image probing through ImageMagick's `identify`.
//!
//! Runs `identify -format "%w %h" <file>` and reads the first line of its
//! standard output. The command's stderr is discarded. There is no timeout:
//! a hung `identify` stalls the whole walk.

use super::ImageProber;
use crate::model::Dimensions;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Program run when no override is configured.
pub const DEFAULT_IDENTIFY_PROGRAM: &str = "identify";

/// Format string asking `identify` for `"<width> <height>"`.
const IDENTIFY_FORMAT: &str = "%w %h";

#[derive(Debug, Clone)]
pub struct IdentifyProber {
    program: OsString,
}

impl Default for IdentifyProber {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTIFY_PROGRAM)
    }
}

impl IdentifyProber {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ImageProber for IdentifyProber {
    fn dimensions(&self, path: &Path) -> Option<Dimensions> {
        let output = match Command::new(&self.program)
            .arg("-format")
            .arg(IDENTIFY_FORMAT)
            .arg(path)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(err) => {
                debug!("could not launch {:?}: {err}", self.program);
                return None;
            }
        };

        if !output.status.success() {
            return None;
        }
        parse_dimensions(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse `"<width> <height>"` from the first line of `identify` output.
///
/// Anything after the second number is ignored, which matches what
/// multi-frame images produce (frames are concatenated without a newline).
pub fn parse_dimensions(stdout: &str) -> Option<Dimensions> {
    let first_line = stdout.lines().next()?;
    let mut fields = first_line.split_whitespace();
    let width = fields.next()?.parse::<u64>().ok()?;
    let height = fields.next()?.parse::<u64>().ok()?;
    Dimensions::new(width, height)
}
