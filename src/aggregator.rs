use std::collections::HashMap;
use tracing::debug;

use crate::models::{Session, SessionSummary};

/// Fold every user's sessions into a [`SessionSummary`].
///
/// Sessions still open here are clamped to `latest` and their durations
/// computed now. Every session counts, open or closed.
pub fn aggregate(
    users: HashMap<String, Vec<Session>>,
    latest: Option<&str>,
) -> HashMap<String, SessionSummary> {
    users
        .into_iter()
        .map(|(name, mut sessions)| {
            let mut seconds = 0.0;
            for session in &mut sessions {
                if session.end_time.is_none() {
                    session.end_time = latest.map(str::to_string);
                    session.compute_duration();
                }
                seconds += session.duration_secs;
            }

            debug!(user = %name, sessions = sessions.len(), seconds, "Aggregated user");

            let summary = SessionSummary {
                name: name.clone(),
                sessions: sessions.len(),
                seconds,
            };
            (name, summary)
        })
        .collect()
}
