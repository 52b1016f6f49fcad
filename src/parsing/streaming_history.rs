//! Extended streaming history record parsing.
//!
//! A streaming history export (`endsong_*.json`, `Streaming_History_Audio_*.json`)
//! is a JSON array of records like:
//!
//! ```json
//! {
//!   "ts": "2023-06-01T20:15:00Z",
//!   "ms_played": 213000,
//!   "master_metadata_track_name": "TOKYO NEON",
//!   "master_metadata_album_artist_name": "Mili",
//!   "master_metadata_album_album_name": "Key Ingredient"
//! }
//! ```
//!
//! Podcast episodes, ads and offline markers share the array but leave the
//! `master_metadata_*` fields null. Those records are rejected and counted,
//! never reported as errors.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::{Map, Number, Value};

use crate::PlayEvent;
use crate::error::{PlaypackError, Result};

/// Key holding the track title.
pub const TRACK_KEY: &str = "master_metadata_track_name";
/// Key holding the album title (optional).
pub const ALBUM_KEY: &str = "master_metadata_album_album_name";
/// Key holding the album artist.
pub const ALBUM_ARTIST_KEY: &str = "master_metadata_album_artist_name";
/// Key holding the play duration in milliseconds.
pub const DURATION_KEY: &str = "ms_played";
/// Key holding the ISO-8601 play timestamp.
pub const TIMESTAMP_KEY: &str = "ts";

/// Naive layouts tried after RFC 3339, once any trailing `Z` is removed.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Result of validating a single record.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// The record is complete and well-formed.
    Accepted(PlayEvent),
    /// The record is incomplete and should be counted and skipped.
    Rejected(RejectReason),
}

/// Why a record was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The record is not a JSON object.
    NotAnObject,
    /// A required key is absent or null.
    Missing(&'static str),
    /// A required key holds the wrong JSON type.
    WrongType(&'static str),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::NotAnObject => write!(f, "record is not an object"),
            RejectReason::Missing(key) => write!(f, "missing '{}'", key),
            RejectReason::WrongType(key) => write!(f, "unexpected type for '{}'", key),
        }
    }
}

/// Required fields of a record, borrowed from the JSON value.
struct RequiredFields<'a> {
    track: &'a str,
    album_artist: &'a str,
    duration: &'a Number,
    timestamp: &'a str,
}

impl<'a> RequiredFields<'a> {
    fn extract(obj: &'a Map<String, Value>) -> std::result::Result<Self, RejectReason> {
        Ok(Self {
            track: required_str(obj, TRACK_KEY)?,
            album_artist: required_str(obj, ALBUM_ARTIST_KEY)?,
            duration: match obj.get(DURATION_KEY) {
                None | Some(Value::Null) => return Err(RejectReason::Missing(DURATION_KEY)),
                Some(Value::Number(n)) => n,
                Some(_) => return Err(RejectReason::WrongType(DURATION_KEY)),
            },
            timestamp: required_str(obj, TIMESTAMP_KEY)?,
        })
    }
}

fn required_str<'a>(
    obj: &'a Map<String, Value>,
    key: &'static str,
) -> std::result::Result<&'a str, RejectReason> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(RejectReason::Missing(key)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(RejectReason::WrongType(key)),
    }
}

/// Parses a history timestamp into UTC.
///
/// Accepts RFC 3339 with any offset, or a naive ISO-8601 date-time (optionally
/// suffixed with `Z`) which is taken to be UTC. A bare date means midnight.
///
/// # Example
///
/// ```
/// use playpack::parsing::parse_history_timestamp;
///
/// let ts = parse_history_timestamp("2023-06-01T20:15:00Z").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2023-06-01T20:15:00+00:00");
///
/// let ts = parse_history_timestamp("2023-06-01T22:15:00+02:00").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2023-06-01T20:15:00+00:00");
///
/// assert!(parse_history_timestamp("last tuesday").is_err());
/// ```
pub fn parse_history_timestamp(input: &str) -> std::result::Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = input.trim_end_matches('Z');
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Ok(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(naive, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| e.to_string())
}

/// Validates one raw record.
///
/// `batch` and `record` locate the record for error messages.
///
/// Returns:
/// - `Ok(Accepted)` for a complete record
/// - `Ok(Rejected)` when a required field is missing or has the wrong JSON type
/// - `Err` when every field is present but `ts` does not parse or `ms_played`
///   is not a non-negative integer
pub fn parse_history_record(value: &Value, batch: usize, record: usize) -> Result<RecordOutcome> {
    let Some(obj) = value.as_object() else {
        return Ok(RecordOutcome::Rejected(RejectReason::NotAnObject));
    };

    let fields = match RequiredFields::extract(obj) {
        Ok(fields) => fields,
        Err(reason) => return Ok(RecordOutcome::Rejected(reason)),
    };

    let played_at = parse_history_timestamp(fields.timestamp).map_err(|reason| {
        PlaypackError::InvalidTimestamp {
            input: fields.timestamp.to_string(),
            batch,
            record,
            reason,
        }
    })?;

    let duration_ms = fields
        .duration
        .as_u64()
        .ok_or_else(|| PlaypackError::InvalidDuration {
            input: fields.duration.to_string(),
            batch,
            record,
        })?;

    let mut event = PlayEvent::new(fields.track, fields.album_artist, played_at, duration_ms);
    if let Some(album) = obj.get(ALBUM_KEY).and_then(Value::as_str) {
        event = event.with_album(album);
    }

    Ok(RecordOutcome::Accepted(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use serde_json::json;

    fn complete() -> Value {
        json!({
            "ts": "2023-06-01T20:15:00Z",
            "ms_played": 213000,
            "master_metadata_track_name": "TOKYO NEON",
            "master_metadata_album_artist_name": "Mili",
            "master_metadata_album_album_name": "Key Ingredient"
        })
    }

    fn accepted(outcome: RecordOutcome) -> PlayEvent {
        match outcome {
            RecordOutcome::Accepted(event) => event,
            RecordOutcome::Rejected(reason) => panic!("unexpected rejection: {}", reason),
        }
    }

    #[test]
    fn test_parse_complete_record() {
        let event = accepted(parse_history_record(&complete(), 0, 0).unwrap());
        assert_eq!(event.track(), "TOKYO NEON");
        assert_eq!(event.album_artist(), "Mili");
        assert_eq!(event.album(), Some("Key Ingredient"));
        assert_eq!(event.duration_ms(), 213000);
        assert_eq!(
            event.played_at(),
            Utc.with_ymd_and_hms(2023, 6, 1, 20, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_album_is_optional() {
        let mut value = complete();
        value[ALBUM_KEY] = Value::Null;
        let event = accepted(parse_history_record(&value, 0, 0).unwrap());
        assert!(event.album().is_none());

        value.as_object_mut().unwrap().remove(ALBUM_KEY);
        let event = accepted(parse_history_record(&value, 0, 0).unwrap());
        assert!(event.album().is_none());
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        for key in [TRACK_KEY, ALBUM_ARTIST_KEY, DURATION_KEY, TIMESTAMP_KEY] {
            let mut value = complete();
            value.as_object_mut().unwrap().remove(key);
            assert_eq!(
                parse_history_record(&value, 0, 0).unwrap(),
                RecordOutcome::Rejected(RejectReason::Missing(key))
            );

            let mut value = complete();
            value[key] = Value::Null;
            assert_eq!(
                parse_history_record(&value, 0, 0).unwrap(),
                RecordOutcome::Rejected(RejectReason::Missing(key))
            );
        }
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let mut value = complete();
        value[TRACK_KEY] = json!(42);
        assert_eq!(
            parse_history_record(&value, 0, 0).unwrap(),
            RecordOutcome::Rejected(RejectReason::WrongType(TRACK_KEY))
        );

        let mut value = complete();
        value[DURATION_KEY] = json!("213000");
        assert_eq!(
            parse_history_record(&value, 0, 0).unwrap(),
            RecordOutcome::Rejected(RejectReason::WrongType(DURATION_KEY))
        );

        assert_eq!(
            parse_history_record(&json!("not a record"), 0, 0).unwrap(),
            RecordOutcome::Rejected(RejectReason::NotAnObject)
        );
    }

    #[test]
    fn test_bad_timestamp_is_fatal() {
        let mut value = complete();
        value[TIMESTAMP_KEY] = json!("2023-13-45T99:00:00Z");
        let err = parse_history_record(&value, 1, 7).unwrap_err();
        match err {
            PlaypackError::InvalidTimestamp {
                input,
                batch,
                record,
                ..
            } => {
                assert_eq!(input, "2023-13-45T99:00:00Z");
                assert_eq!(batch, 1);
                assert_eq!(record, 7);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_bad_duration_is_fatal() {
        for bad in [json!(-1), json!(1500.5)] {
            let mut value = complete();
            value[DURATION_KEY] = bad;
            assert!(matches!(
                parse_history_record(&value, 0, 0),
                Err(PlaypackError::InvalidDuration { .. })
            ));
        }
    }

    #[test]
    fn test_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2023, 6, 1, 20, 15, 0).unwrap();
        assert_eq!(parse_history_timestamp("2023-06-01T20:15:00Z").unwrap(), expected);
        assert_eq!(parse_history_timestamp("2023-06-01T20:15:00").unwrap(), expected);
        assert_eq!(parse_history_timestamp("2023-06-01 20:15:00").unwrap(), expected);
        assert_eq!(parse_history_timestamp("2023-06-01T20:15").unwrap(), expected);
        assert_eq!(
            parse_history_timestamp("2023-06-01T21:15:00+01:00").unwrap(),
            expected
        );
        assert_eq!(
            parse_history_timestamp("2023-06-01").unwrap(),
            Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_timestamp_fraction() {
        let ts = parse_history_timestamp("2023-06-01T20:15:00.250Z").unwrap();
        assert_eq!(ts.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_timestamp_invalid() {
        assert!(parse_history_timestamp("").is_err());
        assert!(parse_history_timestamp("yesterday").is_err());
        assert!(parse_history_timestamp("2023-02-30T00:00:00Z").is_err());
    }
}
