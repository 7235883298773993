//! Record validation.
//!
//! A valid line is exactly three single-space-separated fields:
//! a time of day, a non-blank user name, and `Start` or `End` (any case).
//! Validation is all-or-nothing; a rejected line never touches session state.

use crate::error::RecordError;
use crate::models::{EventKind, Record};
use crate::timestamp_parser::TimestampParser;

pub struct RecordValidator;

impl RecordValidator {
    /// Validate and parse one raw log line
    pub fn parse(line: &str) -> Result<Record, RecordError> {
        let fields: Vec<&str> = line.split(' ').collect();
        let [time, user, kind] = fields.as_slice() else {
            return Err(RecordError::FieldCount(fields.len()));
        };

        if !TimestampParser::is_time_of_day(time) {
            return Err(RecordError::MalformedTime(time.to_string()));
        }

        if user.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }

        let kind: EventKind = kind.parse()?;

        Ok(Record {
            time: time.to_string(),
            user: user.to_string(),
            kind,
        })
    }

    pub fn is_valid(line: &str) -> bool {
        Self::parse(line).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_record() {
        let record = RecordValidator::parse("14:02:03 ALICE99 Start").unwrap();
        assert_eq!(record.time, "14:02:03");
        assert_eq!(record.user, "ALICE99");
        assert_eq!(record.kind, EventKind::Start);
    }

    #[test]
    fn test_event_kind_any_case() {
        assert_eq!(RecordValidator::parse("14:02:03 BOB end").unwrap().kind, EventKind::End);
        assert_eq!(RecordValidator::parse("14:02:03 BOB START").unwrap().kind, EventKind::Start);
    }

    #[test]
    fn test_malformed_time() {
        assert_eq!(
            RecordValidator::parse("10::03 ALICE99 Start"),
            Err(RecordError::MalformedTime("10::03".to_string()))
        );
    }

    #[test]
    fn test_malformed_time_and_event() {
        assert!(!RecordValidator::is_valid("10::03 ALICE99 Sta"));
    }

    #[test]
    fn test_unknown_event() {
        assert_eq!(
            RecordValidator::parse("14:02:03 ALICE99 Sta"),
            Err(RecordError::UnknownEvent("Sta".to_string()))
        );
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(RecordValidator::parse("10::03 Start"), Err(RecordError::FieldCount(2)));
        assert_eq!(RecordValidator::parse("10::03 ALice"), Err(RecordError::FieldCount(2)));
        assert_eq!(RecordValidator::parse(""), Err(RecordError::FieldCount(1)));
        assert_eq!(
            RecordValidator::parse("14:02:03 ALICE99 Start extra"),
            Err(RecordError::FieldCount(4))
        );
    }

    #[test]
    fn test_double_space_is_not_a_separator() {
        assert_eq!(
            RecordValidator::parse("14:02:03  ALICE99 Start"),
            Err(RecordError::FieldCount(4))
        );
    }

    #[test]
    fn test_blank_name() {
        assert_eq!(RecordValidator::parse("14:02:03 \t Start"), Err(RecordError::EmptyName));
        assert_eq!(RecordValidator::parse("14:02:03 \u{3000} End"), Err(RecordError::EmptyName));
    }
}
