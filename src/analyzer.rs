//! Billing Analysis Engine
//!
//! This module ties the session reconciler together and serves as the entry
//! point for a billing run.
//!
//! ## Pipeline
//!
//! 1. **Boundaries**: The first and last line give the clamp times ([`LogBoundary`])
//! 2. **Validation**: Each line is parsed by [`RecordValidator`]; bad lines are logged and skipped
//! 3. **Tracking**: Valid records are folded per user by [`SessionTracker`]
//! 4. **Aggregation**: Open sessions are clamped and summed by [`aggregate`]
//! 5. **Reporting**: [`ReportDisplay`] renders the summaries as text or JSON
//!
//! The fold is single-threaded and keeps no state between calls, so running it
//! twice on the same lines yields the same result.
//!
//! ## Usage Example
//!
//! ```rust
//! use fair_billing::BillingAnalyzer;
//!
//! let lines = [
//!     "14:02:03 ALICE99 Start",
//!     "14:02:05 CHARLIE End",
//!     "14:02:34 ALICE99 End",
//! ];
//!
//! let summaries = BillingAnalyzer::compute_user_sessions(&lines);
//! assert_eq!(summaries["ALICE99"].sessions, 1);
//! assert_eq!(summaries["ALICE99"].seconds, 31.0);
//! ```

use crate::aggregator::aggregate;
use crate::config::OutputConfig;
use crate::display::ReportDisplay;
use crate::models::*;
use crate::reader::LogReader;
use crate::tracker::SessionTracker;
use crate::validator::RecordValidator;
use anyhow::Result;
use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{info, info_span, warn};
use uuid::Uuid;

pub struct BillingAnalyzer {
    display: ReportDisplay,
}

impl Default for BillingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl BillingAnalyzer {
    pub fn new() -> Self {
        Self {
            display: ReportDisplay::new(),
        }
    }

    /// Reconcile an ordered log into one summary per user.
    pub fn compute_user_sessions<S: AsRef<str>>(lines: &[S]) -> HashMap<String, SessionSummary> {
        let span = info_span!("reconcile", run_id = %Uuid::new_v4(), lines = lines.len());
        let _enter = span.enter();

        let boundary = LogBoundary::extract(lines);
        let (earliest, latest) = match boundary {
            Some(LogBoundary { earliest, latest }) => (Some(earliest), Some(latest)),
            None => (None, None),
        };

        let mut tracker = SessionTracker::new(earliest);
        let mut skipped = 0usize;

        for (index, line) in lines.iter().enumerate() {
            let line: &str = line.as_ref();
            match RecordValidator::parse(line) {
                Ok(record) => tracker.apply(record),
                Err(e) => {
                    skipped += 1;
                    warn!(line_number = index + 1, line, reason = %e, "Skipping invalid record");
                }
            }
        }

        let summaries = aggregate(tracker.into_sessions(), latest.as_deref());
        info!(users = summaries.len(), skipped, "Reconciled billing log");

        summaries
    }

    /// Read `input`, reconcile it and render the report.
    pub async fn run(&self, input: &Path, output: &OutputConfig) -> Result<String> {
        let lines = LogReader::read_lines(input).await?;
        let summaries: Vec<SessionSummary> =
            Self::compute_user_sessions(&lines).into_values().collect();

        if summaries.is_empty() {
            warn!(input = %input.display(), "No billable sessions found");
        } else if !output.json && std::io::stderr().is_terminal() {
            eprintln!("{}", self.display.banner(&summaries));
        }

        self.display.render(summaries, output)
    }
}
