//! Core Data Models
//!
//! This module defines the data structures that flow through the billing
//! pipeline, from a single parsed log line to the per-user summary.
//!
//! ## Data Flow
//!
//! 1. **Raw Data**: [`Record`] - One validated log line (time, user, event)
//! 2. **Tracking**: [`Session`] - An open or closed interval of activity for a user
//! 3. **Boundaries**: [`LogBoundary`] - Clamp values taken from the first and last line
//! 4. **Output**: [`SessionSummary`] - Session count and total seconds per user
//!
//! ## Features
//!
//! - **Serde Integration**: Output types serialize straight into the JSON report
//! - **Optional Times**: A session's start and end are `Option`s until clamped
//! - **Raw Tokens**: Times are kept as the log's own tokens; they are parsed only
//!   when a duration is computed, so a bad boundary token costs one session, not the run

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;

/// Kind of event a log line records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    End,
}

impl FromStr for EventKind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("start") {
            Ok(EventKind::Start)
        } else if s.eq_ignore_ascii_case("end") {
            Ok(EventKind::End)
        } else {
            Err(RecordError::UnknownEvent(s.to_string()))
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Start => write!(f, "Start"),
            EventKind::End => write!(f, "End"),
        }
    }
}

/// A validated log line, e.g. `14:02:03 ALICE99 Start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub time: String,
    pub user: String,
    pub kind: EventKind,
}

/// One interval of activity for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub duration_secs: f64,
    pub is_complete: bool,
}

impl Session {
    /// A session opened by a `Start` event and not yet matched.
    pub fn open(start_time: impl Into<String>) -> Self {
        Self {
            start_time: Some(start_time.into()),
            end_time: None,
            duration_secs: 0.0,
            is_complete: false,
        }
    }

    /// A closed session whose duration is computed immediately.
    pub fn closed(start_time: Option<String>, end_time: impl Into<String>) -> Self {
        let mut session = Self {
            start_time,
            end_time: Some(end_time.into()),
            duration_secs: 0.0,
            is_complete: true,
        };
        session.compute_duration();
        session
    }

    pub fn is_open(&self) -> bool {
        !self.is_complete
    }

    /// Close this session at `end_time` and compute its duration.
    pub fn close(&mut self, end_time: impl Into<String>) {
        self.end_time = Some(end_time.into());
        self.is_complete = true;
        self.compute_duration();
    }
}

/// Clamp values for unmatched sessions: the time tokens of the first and last log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogBoundary {
    pub earliest: String,
    pub latest: String,
}

/// Per-user result of a billing run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub name: String,
    pub sessions: usize,
    pub seconds: f64,
}

/// Serializable report: every user plus run-wide totals.
#[derive(Debug, Clone, Serialize)]
pub struct BillingReport {
    pub users: Vec<SessionSummary>,
    #[serde(rename = "totalSessions")]
    pub total_sessions: usize,
    #[serde(rename = "totalSeconds")]
    pub total_seconds: f64,
}

impl BillingReport {
    pub fn new(users: Vec<SessionSummary>) -> Self {
        let total_sessions = users.iter().map(|u| u.sessions).sum();
        let total_seconds = users.iter().map(|u| u.seconds).sum();
        Self {
            users,
            total_sessions,
            total_seconds,
        }
    }
}
