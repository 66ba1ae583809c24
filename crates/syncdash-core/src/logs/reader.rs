//! Bounded log reader.
//!
//! Produces a size- and line-capped view of the tail of a log file that can
//! be gigabytes long. Two paths exist:
//!
//! - **Byte window**: files over [`LogLimits::max_bytes`] are read from
//!   `size - max_bytes` onwards. The first line may be a fragment. The error
//!   summary only covers this window.
//! - **Whole file**: smaller files are read completely. The summary covers
//!   every line even when only the last [`LogLimits::max_lines`] are shown.
//!
//! Reading never fails: I/O problems are logged and rendered as text.

use std::fmt;
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use super::summary::summarize;
use super::tail::{decode_lenient, read_tail};
use crate::config::{DEFAULT_MAX_LINES, DEFAULT_MAX_LOG_BYTES};

/// Text shown when the log file does not exist.
pub const LOG_NOT_FOUND: &str = "Log file not found";

/// Size ceilings applied to a log view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLimits {
    /// Files larger than this are read through a tail byte window.
    pub max_bytes: u64,
    /// Maximum number of lines displayed on the whole-file path.
    pub max_lines: usize,
}

impl Default for LogLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_LOG_BYTES,
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

/// A rendered, bounded view of a log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogView {
    /// Error summary block followed by the displayed log content.
    pub text: String,
    /// Whether content was dropped to fit the limits.
    pub truncated: bool,
}

impl LogView {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            truncated: false,
        }
    }

    /// True when there is nothing worth displaying.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl fmt::Display for LogView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Read a bounded view of `path`.
pub fn read_bounded(path: &Path, limits: &LogLimits) -> LogView {
    match try_read_bounded(path, limits) {
        Ok(view) => view,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Error reading log file");
            LogView::plain(format!("Error reading log file: {e}"))
        }
    }
}

fn try_read_bounded(path: &Path, limits: &LogLimits) -> io::Result<LogView> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LogView::plain(LOG_NOT_FOUND)),
        Err(e) => return Err(e),
    };
    let size = file.metadata()?.len();

    if size > limits.max_bytes {
        tracing::debug!(
            path = %path.display(),
            size,
            max_bytes = limits.max_bytes,
            "Log exceeds byte ceiling, reading tail window"
        );
        let window = read_tail(&mut file, size, limits.max_bytes)?;
        let content = decode_lenient(&window);
        let lines: Vec<&str> = content.lines().collect();
        let summary = summarize(&lines, 0, true);
        return Ok(LogView {
            text: format!(
                "{summary}[LOG TRUNCATED - showing last {} bytes]\n{}",
                limits.max_bytes,
                lines.join("\n")
            ),
            truncated: true,
        });
    }

    let mut bytes = Vec::new();
    file.take(limits.max_bytes).read_to_end(&mut bytes)?;
    let content = decode_lenient(&bytes);
    let lines: Vec<&str> = content.lines().collect();
    let summary = summarize(&lines, 0, false);

    if lines.len() > limits.max_lines {
        let shown = &lines[lines.len() - limits.max_lines..];
        return Ok(LogView {
            text: format!(
                "{summary}[LOG TRUNCATED - showing last {} lines]\n{}",
                limits.max_lines,
                shown.join("\n")
            ),
            truncated: true,
        });
    }

    Ok(LogView {
        text: format!("{summary}{}", lines.join("\n")),
        truncated: false,
    })
}
