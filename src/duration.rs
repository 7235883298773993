//! Duration calculation for matched sessions.
//!
//! A session's duration is the wall-clock difference between its end and start
//! tokens on the same day. A token that does not parse costs that one session
//! its duration (it is billed as zero) and never aborts the run.

use tracing::{error, warn};

use crate::error::RecordError;
use crate::models::Session;
use crate::timestamp_parser::TimestampParser;

/// Elapsed seconds between two time-of-day tokens, floored at zero.
pub fn elapsed_seconds(start: Option<&str>, end: Option<&str>) -> Result<f64, RecordError> {
    let start = start.ok_or(RecordError::MissingTime)?;
    let end = end.ok_or(RecordError::MissingTime)?;

    let seconds = TimestampParser::seconds_between(start, end)?;
    if seconds < 0.0 {
        // No overnight wraparound: a session ending before it starts bills nothing.
        warn!(start, end, "Session ends before it starts, billing zero seconds");
        return Ok(0.0);
    }

    Ok(seconds)
}

impl Session {
    /// Recompute `duration_secs` from the current start and end times.
    pub fn compute_duration(&mut self) {
        self.duration_secs =
            match elapsed_seconds(self.start_time.as_deref(), self.end_time.as_deref()) {
                Ok(seconds) => seconds,
                Err(e) => {
                    error!(
                        start = ?self.start_time,
                        end = ?self.end_time,
                        reason = %e,
                        "Failed to compute session duration"
                    );
                    0.0
                }
            };
    }
}
