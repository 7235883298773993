use thiserror::Error;

/// Why a log line (or one of its time tokens) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected 3 space-separated fields, got {0}")]
    FieldCount(usize),

    #[error("malformed time of day: {0:?}")]
    MalformedTime(String),

    #[error("missing time of day")]
    MissingTime,

    #[error("empty user name")]
    EmptyName,

    #[error("unknown event kind: {0:?}")]
    UnknownEvent(String),
}
