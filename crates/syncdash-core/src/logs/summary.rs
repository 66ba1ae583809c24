//! Error summary extraction.
//!
//! Scans log lines for error keywords and renders a capped, human-readable
//! block that is prepended to every log view. Matching is a plain substring
//! test on the upper-cased line, so "AutoFailover Failed" and
//! "unFailedness" both count.

use std::fmt::Write as _;

/// Maximum number of entries listed in a rendered summary.
pub const MAX_ERRORS_TO_SHOW: usize = 15;

/// Scanning stops once this many matches have been collected.
pub const MAX_ERRORS_TO_SCAN: usize = MAX_ERRORS_TO_SHOW * 2;

/// Upper bound on the rendered summary length, in characters.
pub const MAX_SUMMARY_CHARS: usize = 2000;

/// Room left for the truncation notice when the cap is hit.
const TRUNCATION_HEADROOM: usize = 100;

pub(crate) const SEPARATOR: &str = "==================================================";

/// Upper-cased error keywords. `Error:` folds into `ERROR:`.
const ERROR_KEYWORDS: [&str; 7] = [
    "[ERROR]",
    "[CRITICAL]",
    "ERROR:",
    "CRITICAL:",
    "FAILED",
    "EXCEPTION:",
    "TRACEBACK",
];

/// A single flagged log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    /// 1-based line number within the scanned window (plus any offset).
    pub line_number: usize,
    /// The raw line text.
    pub text: String,
}

/// Result of scanning a window of log lines for errors.
///
/// `found` never exceeds [`MAX_ERRORS_TO_SCAN`]; `entries` holds at most
/// [`MAX_ERRORS_TO_SHOW`] lines in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSummary {
    found: usize,
    entries: Vec<ErrorEntry>,
    truncated_window: bool,
}

impl ErrorSummary {
    /// Scan `lines`, numbering them from `1 + line_offset`.
    ///
    /// `truncated_window` marks the lines as a byte-truncated tail of the
    /// file; the rendered header then says the count only covers the
    /// displayed portion.
    pub fn scan<S: AsRef<str>>(lines: &[S], line_offset: usize, truncated_window: bool) -> Self {
        let mut found = 0;
        let mut entries = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            if found >= MAX_ERRORS_TO_SCAN {
                break;
            }
            let line = line.as_ref();
            if !is_error_line(line) {
                continue;
            }
            found += 1;
            if entries.len() < MAX_ERRORS_TO_SHOW {
                entries.push(ErrorEntry {
                    line_number: index + 1 + line_offset,
                    text: line.to_owned(),
                });
            }
        }

        Self {
            found,
            entries,
            truncated_window,
        }
    }

    /// Number of matches found (capped at [`MAX_ERRORS_TO_SCAN`]).
    pub const fn found(&self) -> usize {
        self.found
    }

    /// Entries selected for display.
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// Matches found but not listed.
    pub fn hidden(&self) -> usize {
        self.found.saturating_sub(self.entries.len())
    }

    /// Whether there were more errors than the summary lists.
    pub fn has_more(&self) -> bool {
        self.hidden() > 0
    }

    /// Whether the full rendering is over [`MAX_SUMMARY_CHARS`] and will be cut.
    pub fn exceeds_cap(&self) -> bool {
        self.render_full().chars().count() > MAX_SUMMARY_CHARS
    }

    /// Render the summary block, including the trailing separator and blank line.
    pub fn render(&self) -> String {
        cap_length(self.render_full())
    }

    fn render_full(&self) -> String {
        if self.found == 0 {
            return format!("🟢 ERROR SUMMARY: No errors found\n{SEPARATOR}\n\n");
        }

        let plural = if self.found == 1 { "" } else { "s" };
        let mut text = format!("🔴 ERROR SUMMARY: {} error{plural} found", self.found);
        if self.truncated_window {
            text.push_str(" (in displayed portion)");
        }
        let _ = write!(text, "\n{SEPARATOR}\n");

        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            let _ = write!(text, "Line {}: {}", entry.line_number, entry.text);
        }
        if self.has_more() {
            let _ = write!(
                text,
                "\n... and {} more errors (see full log below)",
                self.hidden()
            );
        }

        let _ = write!(text, "\n{SEPARATOR}\n\n");
        text
    }
}

/// Scan and render in one step.
pub fn summarize<S: AsRef<str>>(lines: &[S], line_offset: usize, truncated_window: bool) -> String {
    ErrorSummary::scan(lines, line_offset, truncated_window).render()
}

fn is_error_line(line: &str) -> bool {
    let upper = line.to_uppercase();
    ERROR_KEYWORDS.iter().any(|keyword| upper.contains(keyword))
}

fn cap_length(mut text: String) -> String {
    if text.chars().count() <= MAX_SUMMARY_CHARS {
        return text;
    }
    let keep = MAX_SUMMARY_CHARS - TRUNCATION_HEADROOM;
    if let Some((cut, _)) = text.char_indices().nth(keep) {
        text.truncate(cut);
    }
    let _ = write!(
        text,
        "\n[ERROR SUMMARY TRUNCATED - too many errors]\n{SEPARATOR}\n\n"
    );
    text
}
