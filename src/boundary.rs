//! Log boundary extraction.
//!
//! The earliest and latest times are read positionally from the first and last
//! lines. The log is assumed to be in time order already; no min/max is taken.

use crate::models::LogBoundary;

/// First space-separated token of a raw line.
fn time_token(line: &str) -> &str {
    line.split(' ').next().unwrap_or_default()
}

/// Time token of the first line, if any.
pub fn earliest_time<S: AsRef<str>>(lines: &[S]) -> Option<&str> {
    lines.first().map(|line| time_token(line.as_ref()))
}

/// Time token of the last line, if any.
pub fn latest_time<S: AsRef<str>>(lines: &[S]) -> Option<&str> {
    lines.last().map(|line| time_token(line.as_ref()))
}

impl LogBoundary {
    /// Both boundaries of `lines`, or `None` for an empty log.
    pub fn extract<S: AsRef<str>>(lines: &[S]) -> Option<Self> {
        Some(Self {
            earliest: earliest_time(lines)?.to_string(),
            latest: latest_time(lines)?.to_string(),
        })
    }
}
