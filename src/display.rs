//! Report Formatting
//!
//! Renders per-user billing summaries either as plain lines or as JSON.
//!
//! ### Text
//! One line per user, `<name> <sessions> <seconds>`:
//! ```text
//! ALICE99 4 240
//! CHARLIE 3 37
//! ```
//!
//! ### JSON
//! ```json
//! {
//!   "users": [
//!     { "name": "ALICE99", "sessions": 4, "seconds": 240.0 },
//!     { "name": "CHARLIE", "sessions": 3, "seconds": 37.0 }
//!   ],
//!   "totalSessions": 7,
//!   "totalSeconds": 277.0
//! }
//! ```
//!
//! Users are ordered by [`SortKey`]; ties always fall back to the user name so
//! the output is stable across runs.

use crate::config::{OutputConfig, SortKey};
use crate::models::*;
use anyhow::{Context, Result};
use colored::Colorize;
use std::cmp::Ordering;

pub struct ReportDisplay;

impl Default for ReportDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportDisplay {
    pub fn new() -> Self {
        Self
    }

    /// Render in whichever format `output` selects
    pub fn render(&self, summaries: Vec<SessionSummary>, output: &OutputConfig) -> Result<String> {
        if output.json {
            self.render_json(summaries, output)
        } else {
            Ok(self.render_text(summaries, output))
        }
    }

    pub fn render_text(&self, summaries: Vec<SessionSummary>, output: &OutputConfig) -> String {
        let precision = output.seconds_precision;
        sort_summaries(summaries, output.sort_by)
            .iter()
            .map(|s| format!("{} {} {:.*}", s.name, s.sessions, precision, s.seconds))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_json(&self, summaries: Vec<SessionSummary>, output: &OutputConfig) -> Result<String> {
        let report = BillingReport::new(sort_summaries(summaries, output.sort_by));

        let rendered = if output.json_pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        rendered.context("Error serializing billing report to JSON")
    }

    /// One-line coloured overview for interactive terminals
    pub fn banner(&self, summaries: &[SessionSummary]) -> String {
        let report = BillingReport::new(summaries.to_vec());
        format!(
            "{} {} users • {} sessions • {} billed",
            "🧾".bright_yellow(),
            report.users.len().to_string().bright_white().bold(),
            report.total_sessions.to_string().bright_white().bold(),
            format!("{}s", report.total_seconds).bright_green().bold()
        )
    }
}

fn sort_summaries(mut summaries: Vec<SessionSummary>, key: SortKey) -> Vec<SessionSummary> {
    summaries.sort_by(|a, b| {
        let primary = match key {
            SortKey::Name => Ordering::Equal,
            SortKey::Seconds => b.seconds.total_cmp(&a.seconds),
            SortKey::Sessions => b.sessions.cmp(&a.sessions),
        };
        primary.then_with(|| a.name.cmp(&b.name))
    });
    summaries
}
