use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

use crate::error::RecordError;

/// Permissive time-of-day shape accepted on input lines. Hour and minute
/// segments are structurally optional; the strict parse below needs all three.
const TIME_OF_DAY_PATTERN: &str = r"^(?:(?:([01]?\d|2[0-3]):)?([0-5]?\d):)?([0-5]?\d)$";

/// Shape required before a token is measured: minute and second are always two digits.
const STRICT_TIME_PATTERN: &str = r"^\d{1,2}:\d{2}:\d{2}$";

const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";

fn time_of_day_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TIME_OF_DAY_PATTERN).expect("time-of-day pattern is valid"))
}

fn strict_time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(STRICT_TIME_PATTERN).expect("strict time pattern is valid"))
}

/// Handles the wall-clock time tokens used in billing logs (`HH:MM:SS`, no date)
pub struct TimestampParser;

impl TimestampParser {
    /// Whether `token` has the shape of a time of day
    pub fn is_time_of_day(token: &str) -> bool {
        time_of_day_regex().is_match(token)
    }

    /// Parse a `H:MM:SS` / `HH:MM:SS` token into a time of day
    pub fn parse(token: &str) -> Result<NaiveTime, RecordError> {
        // chrono's %M and %S also take a single digit.
        if !strict_time_regex().is_match(token) {
            return Err(RecordError::MalformedTime(token.to_string()));
        }

        let time = NaiveTime::parse_from_str(token, TIME_OF_DAY_FORMAT)
            .map_err(|_| RecordError::MalformedTime(token.to_string()))?;

        // chrono accepts `:60` as a leap second; a wall-clock log never has one.
        if time.nanosecond() >= 1_000_000_000 {
            return Err(RecordError::MalformedTime(token.to_string()));
        }

        Ok(time)
    }

    /// Signed seconds from `start` to `end` on the same day
    pub fn seconds_between(start: &str, end: &str) -> Result<f64, RecordError> {
        let start = Self::parse(start)?;
        let end = Self::parse(end)?;
        Ok(end.signed_duration_since(start).num_seconds() as f64)
    }
}
