//! Per-user session tracking.
//!
//! Records are folded in log order. Each user owns an insertion-ordered list of
//! sessions; an `End` closes the oldest open session of that user (FIFO), and an
//! `End` with nothing open becomes a closed session clamped to the earliest
//! boundary. A `Start` always appends a new open session, even when another is
//! still open.

use std::collections::HashMap;
use tracing::{debug, trace};

use crate::models::{EventKind, Record, Session};

#[derive(Debug, Default)]
pub struct SessionTracker {
    earliest: Option<String>,
    users: HashMap<String, Vec<Session>>,
}

impl SessionTracker {
    pub fn new(earliest: Option<String>) -> Self {
        Self {
            earliest,
            users: HashMap::new(),
        }
    }

    /// Fold one validated record into the owning user's session list.
    pub fn apply(&mut self, record: Record) {
        let Record { time, user, kind } = record;

        match self.users.get_mut(&user) {
            Some(sessions) => {
                map_existing_sessions(sessions, &time, kind, self.earliest.as_deref());
            }
            None => {
                debug!(user = %user, %kind, time = %time, "First event for user");
                let session = match kind {
                    EventKind::Start => Session::open(time),
                    EventKind::End => Session::closed(self.earliest.clone(), time),
                };
                self.users.insert(user, vec![session]);
            }
        }
    }

    pub fn sessions_for(&self, user: &str) -> Option<&[Session]> {
        self.users.get(user).map(Vec::as_slice)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn into_sessions(self) -> HashMap<String, Vec<Session>> {
        self.users
    }
}

/// Apply an event to a user who already has sessions.
pub fn map_existing_sessions(
    sessions: &mut Vec<Session>,
    time: &str,
    kind: EventKind,
    earliest: Option<&str>,
) {
    let first_open = sessions.iter().position(Session::is_open);

    match (first_open, kind) {
        (Some(index), EventKind::End) => {
            trace!(index, time, "Closing oldest open session");
            sessions[index].close(time);
        }
        (_, EventKind::Start) => {
            sessions.push(Session::open(time));
        }
        (None, EventKind::End) => {
            trace!(time, "End without open session, clamping start to log boundary");
            sessions.push(Session::closed(earliest.map(str::to_string), time));
        }
    }
}
