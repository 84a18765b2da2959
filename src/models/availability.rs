//! Interval normalizer for raw availability payloads.
//!
//! The upstream booking API returns available time slots either as a flat
//! array of records or as an object keyed by date, and records may lack a
//! usable `end` timestamp. This module turns any of those shapes into
//! well-formed [`TimeInterval`] values with a guaranteed `start < end`.

use std::collections::BTreeMap;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::api::TimeInterval;
use crate::models::time::parse_timestamp;

/// Slot duration used when the caller configures none (or zero).
pub const DEFAULT_SLOT_MINUTES: u32 = 30;

/// One raw availability record as reported by the upstream source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSlot {
    /// Start timestamp string
    pub start: String,
    /// End timestamp string, frequently absent or malformed upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Raw availability payload, in either of the two shapes the upstream emits.
///
/// The shape ambiguity is resolved at the ingestion boundary by this sum
/// type rather than by runtime type inspection downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAvailability {
    /// Flat sequence of slot records
    Flat(Vec<RawSlot>),
    /// Records grouped under date keys; relative order within each group
    /// is preserved, order across groups is unspecified
    ByDate(BTreeMap<String, Vec<RawSlot>>),
}

impl RawAvailability {
    pub fn empty() -> Self {
        RawAvailability::Flat(Vec::new())
    }

    /// Flatten into a single record sequence.
    pub fn into_slots(self) -> Vec<RawSlot> {
        match self {
            RawAvailability::Flat(slots) => slots,
            RawAvailability::ByDate(groups) => groups.into_values().flatten().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RawAvailability::Flat(slots) => slots.is_empty(),
            RawAvailability::ByDate(groups) => groups.values().all(|g| g.is_empty()),
        }
    }
}

/// Normalize a raw payload into well-formed intervals.
///
/// For each record the `start` timestamp is parsed; a record whose `start`
/// cannot be parsed is dropped silently. A missing or unparseable `end`
/// (including one not after `start`) is repaired as
/// `start + slot_minutes`, with a zero `slot_minutes` falling back to
/// [`DEFAULT_SLOT_MINUTES`]. Pure function of its inputs; never fails.
pub fn normalize_availability(payload: RawAvailability, slot_minutes: u32) -> Vec<TimeInterval> {
    let minutes = if slot_minutes == 0 {
        DEFAULT_SLOT_MINUTES
    } else {
        slot_minutes
    };
    let fallback = Duration::minutes(i64::from(minutes));

    payload
        .into_slots()
        .into_iter()
        .filter_map(|slot| {
            let start = parse_timestamp(&slot.start)?;
            let end = slot
                .end
                .as_deref()
                .and_then(parse_timestamp)
                .filter(|end| *end > start)
                .unwrap_or(start + fallback);
            Some(TimeInterval { start, end })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn slot(start: &str, end: Option<&str>) -> RawSlot {
        RawSlot {
            start: start.to_string(),
            end: end.map(str::to_string),
        }
    }

    fn dt(d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_flat_payload_with_valid_ends() {
        let payload = RawAvailability::Flat(vec![slot(
            "2026-01-05T10:00:00",
            Some("2026-01-05T11:00:00"),
        )]);
        let intervals = normalize_availability(payload, 30);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start, dt(5, 10, 0));
        assert_eq!(intervals[0].end, dt(5, 11, 0));
    }

    #[test]
    fn test_missing_end_uses_duration_fallback() {
        let payload = RawAvailability::Flat(vec![slot("2026-01-05T10:00:00", None)]);
        let intervals = normalize_availability(payload, 30);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].end, dt(5, 10, 30));
    }

    #[test]
    fn test_unparseable_end_uses_duration_fallback() {
        let payload =
            RawAvailability::Flat(vec![slot("2026-01-05T10:00:00", Some("soonish"))]);
        let intervals = normalize_availability(payload, 45);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].end, dt(5, 10, 45));
    }

    #[test]
    fn test_end_not_after_start_is_repaired() {
        let payload = RawAvailability::Flat(vec![slot(
            "2026-01-05T10:00:00",
            Some("2026-01-05T09:00:00"),
        )]);
        let intervals = normalize_availability(payload, 30);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].end, dt(5, 10, 30));
    }

    #[test]
    fn test_zero_slot_minutes_falls_back_to_default() {
        let payload = RawAvailability::Flat(vec![slot("2026-01-05T10:00:00", None)]);
        let intervals = normalize_availability(payload, 0);
        assert_eq!(intervals.len(), 1);
        assert_eq!(
            intervals[0].end,
            dt(5, 10, 0) + Duration::minutes(i64::from(DEFAULT_SLOT_MINUTES))
        );
    }

    #[test]
    fn test_unparseable_start_is_dropped_silently() {
        let payload = RawAvailability::Flat(vec![
            slot("garbage", Some("2026-01-05T11:00:00")),
            slot("2026-01-05T10:00:00", Some("2026-01-05T11:00:00")),
        ]);
        let intervals = normalize_availability(payload, 30);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start, dt(5, 10, 0));
    }

    #[test]
    fn test_date_keyed_payload_is_flattened() {
        let mut groups = BTreeMap::new();
        groups.insert(
            "2026-01-05".to_string(),
            vec![
                slot("2026-01-05T10:00:00", None),
                slot("2026-01-05T14:00:00", None),
            ],
        );
        groups.insert(
            "2026-01-06".to_string(),
            vec![slot("2026-01-06T10:00:00", None)],
        );
        let intervals = normalize_availability(RawAvailability::ByDate(groups), 30);
        assert_eq!(intervals.len(), 3);
        // Inner order preserved within each date group
        let day5: Vec<_> = intervals.iter().filter(|iv| iv.start.date() == dt(5, 0, 0).date()).collect();
        assert_eq!(day5[0].start, dt(5, 10, 0));
        assert_eq!(day5[1].start, dt(5, 14, 0));
    }

    #[test]
    fn test_untagged_deserialization_of_both_shapes() {
        let flat: RawAvailability =
            serde_json::from_str(r#"[{"start": "2026-01-05T10:00:00Z"}]"#).unwrap();
        assert!(matches!(flat, RawAvailability::Flat(ref s) if s.len() == 1));

        let by_date: RawAvailability = serde_json::from_str(
            r#"{"2026-01-05": [{"start": "2026-01-05T10:00:00Z", "end": "2026-01-05T10:30:00Z"}]}"#,
        )
        .unwrap();
        assert!(matches!(by_date, RawAvailability::ByDate(ref g) if g.len() == 1));
    }

    #[test]
    fn test_empty_payload_helpers() {
        assert!(RawAvailability::empty().is_empty());
        let mut groups = BTreeMap::new();
        groups.insert("2026-01-05".to_string(), Vec::new());
        assert!(RawAvailability::ByDate(groups).is_empty());
    }

    #[test]
    fn test_normalized_intervals_always_valid() {
        let payload = RawAvailability::Flat(vec![
            slot("2026-01-05T10:00:00", None),
            slot("2026-01-05T12:00:00", Some("2026-01-05T12:00:00")),
            slot("nope", None),
        ]);
        for interval in normalize_availability(payload, 30) {
            assert!(interval.start < interval.end);
        }
    }
}
