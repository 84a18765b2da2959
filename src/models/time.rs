use chrono::{DateTime, NaiveDateTime};

/// Parse an upstream timestamp into local wall-clock time.
///
/// Accepts RFC 3339 timestamps with an offset (the wall-clock they spell is
/// kept as-is; time-zone conversion is the host environment's concern) as
/// well as bare `YYYY-MM-DDTHH:MM:SS` forms.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Whole minutes from `start` to `end`, truncated toward zero.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    end.signed_duration_since(start).num_minutes()
}
