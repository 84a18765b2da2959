//! Public API surface for the Rust backend.
//!
//! This file consolidates the value objects and DTO types shared across the
//! engine, the service layer, and the HTTP API. All types derive
//! Serialize/Deserialize for JSON serialization.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Agent identifier (roster key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(value: impl Into<String>) -> Self {
        AgentId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AgentId {
    fn from(value: &str) -> Self {
        AgentId(value.to_string())
    }
}

/// Half-open availability interval `[start, end)` in local wall-clock time.
///
/// Intervals carry no identity; they are value objects, freely copied.
/// After normalization the invariant `end > start` holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Inclusive start of the interval
    pub start: NaiveDateTime,
    /// Exclusive end of the interval
    pub end: NaiveDateTime,
}

impl TimeInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Whole minutes between start and end (truncated).
    pub fn duration_minutes(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_minutes()
    }

    /// Check if a given instant lies inside this interval (inclusive start, exclusive end).
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t < self.end
    }

    /// Check if this interval strictly overlaps with another.
    ///
    /// Exact abutment (`other.start == self.end`) does not count as overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Per-agent working schedule.
///
/// Defines, for every calendar day whose weekday is in `working_days`, a
/// working window `[start_hour:00, end_hour:00)` in local time. Supplied
/// once per computation call and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// Working weekdays, 0=Sun, 1=Mon, ..., 6=Sat
    pub working_days: Vec<u32>,
    /// Daily window start hour (0-23)
    pub start_hour: u32,
    /// Daily window end hour (1-24), exclusive
    pub end_hour: u32,
    /// Slot granularity in minutes
    pub slot_minutes: u32,
}

impl WorkSchedule {
    pub fn new(
        working_days: Vec<u32>,
        start_hour: u32,
        end_hour: u32,
        slot_minutes: u32,
    ) -> Result<Self, String> {
        if working_days.iter().any(|d| *d > 6) {
            return Err("Working days must be weekday numbers 0 (Sun) to 6 (Sat)".to_string());
        }
        if start_hour > 23 {
            return Err("Start hour must be between 0 and 23".to_string());
        }
        if !(1..=24).contains(&end_hour) {
            return Err("End hour must be between 1 and 24".to_string());
        }
        if end_hour <= start_hour {
            return Err("End hour must be after start hour".to_string());
        }
        if slot_minutes == 0 {
            return Err("Slot duration must be positive".to_string());
        }
        Ok(Self {
            working_days,
            start_hour,
            end_hour,
            slot_minutes,
        })
    }

    /// Whether the given weekday is part of this schedule.
    pub fn is_working_day(&self, weekday: Weekday) -> bool {
        self.working_days.contains(&weekday.num_days_from_sunday())
    }

    /// Schedulable minutes in a single working day.
    pub fn daily_minutes(&self) -> i64 {
        i64::from(self.end_hour.saturating_sub(self.start_hour)) * 60
    }

    /// The working window `[start_hour:00, end_hour:00)` anchored to `date`.
    pub fn window_for(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let start = date
            .and_hms_opt(self.start_hour.min(23), 0, 0)
            .unwrap_or_else(|| date.and_time(NaiveTime::MIN));
        // end_hour 24 means midnight of the following day
        let end = if self.end_hour >= 24 {
            date.succ_opt()
                .map(|d| d.and_time(NaiveTime::MIN))
                .unwrap_or(start)
        } else {
            date.and_hms_opt(self.end_hour, 0, 0).unwrap_or(start)
        };
        (start, end)
    }
}

impl Default for WorkSchedule {
    /// Monday-Friday, 10:00-17:00, 30-minute slots.
    fn default() -> Self {
        Self {
            working_days: vec![1, 2, 3, 4, 5],
            start_hour: 10,
            end_hour: 17,
            slot_minutes: 30,
        }
    }
}

/// Occupancy figures for one agent over one evaluation period.
///
/// Derived and immutable; produced fresh per call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyResult {
    /// Percentage of total possible working minutes not covered by
    /// reported availability (0-100)
    pub occupancy_percent: u8,
    /// Reported availability clipped to the working window, in minutes
    pub available_minutes: i64,
    /// `available_minutes` expressed in whole schedule slots
    pub available_slots: i64,
}

impl OccupancyResult {
    /// Sentinel for "no reported availability": fully booked.
    pub fn fully_booked() -> Self {
        Self {
            occupancy_percent: 100,
            available_minutes: 0,
            available_slots: 0,
        }
    }

    /// Sentinel for a degenerate zero-capacity schedule: nothing to measure.
    pub fn nothing_to_measure() -> Self {
        Self {
            occupancy_percent: 0,
            available_minutes: 0,
            available_slots: 0,
        }
    }
}

/// Roster entry for one agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Roster identifier
    pub id: AgentId,
    /// Display name
    pub name: String,
    /// Upstream event-type identifier used to query availability
    pub event_type_id: String,
    /// Optional team/brand tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Agent-specific schedule; `None` means "use the caller's default"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<WorkSchedule>,
}

impl AgentProfile {
    /// The schedule to evaluate this agent against.
    pub fn schedule_or<'a>(&'a self, default: &'a WorkSchedule) -> &'a WorkSchedule {
        self.schedule.as_ref().unwrap_or(default)
    }
}
