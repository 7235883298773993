//! Fair Billing Library
//!
//! Computes per-user session counts and billed seconds from a log of session
//! `Start`/`End` events. Each line of the log looks like:
//!
//! ```text
//! 14:02:03 ALICE99 Start
//! ```
//!
//! Sessions are paired per user in log order: an `End` closes that user's oldest
//! open session. An `End` with no open session is assumed to have started at the
//! log's first timestamp, and a session never closed is assumed to end at the
//! log's last timestamp. Malformed lines are logged and skipped.
//!
//! ## Architecture Overview
//!
//! - [`validator`] - Checks and parses one raw line into a [`Record`]
//! - [`boundary`] - Earliest/latest clamp times from the first and last lines
//! - [`tracker`] - Per-user session lists folded in log order
//! - [`duration`] - Elapsed seconds between two time-of-day tokens
//! - [`aggregator`] - Clamps open sessions and sums each user's time
//! - [`analyzer`] - Runs the whole pipeline
//! - [`reader`] - Reads the log file
//! - [`display`] - Text and JSON reports
//! - [`config`] - Configuration with file and environment variable support
//! - [`logging`] - Structured logging with JSON and pretty-print formats
//!
//! ## Main Entry Point
//!
//! ```rust
//! use fair_billing::BillingAnalyzer;
//!
//! let lines = ["14:02:03 ALICE99 Start", "14:02:05 CHARLIE End", "14:04:41 ALICE99 End"];
//! let summaries = BillingAnalyzer::compute_user_sessions(&lines);
//!
//! assert_eq!(summaries["ALICE99"].seconds, 158.0);
//! assert_eq!(summaries["CHARLIE"].seconds, 2.0);
//! ```

pub mod aggregator;
pub mod analyzer;
pub mod boundary;
pub mod config;
pub mod display;
pub mod duration;
pub mod error;
pub mod logging;
pub mod models;
pub mod reader;
pub mod timestamp_parser;
pub mod tracker;
pub mod validator;

pub use analyzer::BillingAnalyzer;
pub use error::RecordError;
pub use models::*;
