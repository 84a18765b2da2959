//! The occupancy engine: merge, clip, and percentage computation.
//!
//! Occupancy is the share of an agent's schedulable minutes *not* covered
//! by reported availability. The pipeline is:
//!
//! 1. sort the intervals and merge strictly overlapping ones,
//! 2. clip each merged interval to the working window of the day it starts
//!    on, summing the clipped minutes,
//! 3. convert the total into a 0-100 percentage against a caller-supplied
//!    capacity figure.
//!
//! The engine never fails: empty input, zero capacity, and over-reported
//! availability all resolve to defined sentinel outputs that callers rely
//! on (see [`calculate_occupancy`]).

use chrono::{Datelike, Timelike};

use crate::api::{OccupancyResult, TimeInterval, WorkSchedule};
use crate::models::time::minutes_between;

/// Drop intervals that start outside the agent's schedule.
///
/// An interval survives only if its start falls on a working day and its
/// start hour lies within `[start_hour, end_hour)`. A slot starting at
/// 16:30 against an end hour of 17 is kept; one starting at 17:00 is not.
/// The upstream source knows nothing about per-agent schedules, so this is
/// applied before intervals are shown to users or counted as available.
pub fn filter_to_schedule(
    intervals: &[TimeInterval],
    schedule: &WorkSchedule,
) -> Vec<TimeInterval> {
    intervals
        .iter()
        .filter(|interval| {
            let hour = interval.start.hour();
            schedule.is_working_day(interval.start.weekday())
                && hour >= schedule.start_hour
                && hour < schedule.end_hour
        })
        .cloned()
        .collect()
}

/// Sort by start and merge strictly overlapping intervals.
///
/// Abutting intervals (`next.start == current.end`) stay separate; only
/// `next.start < current.end` merges, extending the accumulator to the
/// later end. The result is ordered by start and pairwise non-overlapping.
pub fn merge_intervals(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|interval| interval.start);

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(sorted.len());
    for next in sorted {
        match merged.last_mut() {
            Some(current) if next.start < current.end => {
                if next.end > current.end {
                    current.end = next.end;
                }
            }
            _ => merged.push(next),
        }
    }
    merged
}

/// Sum the minutes each merged interval overlaps its day's working window.
///
/// Each interval is clipped against the window of the calendar day it
/// *starts* on; merged intervals spanning midnight are not split across
/// day boundaries. Days outside the working-day set contribute zero.
/// Partial minutes are truncated.
pub fn clipped_available_minutes(merged: &[TimeInterval], schedule: &WorkSchedule) -> i64 {
    merged
        .iter()
        .map(|interval| {
            if !schedule.is_working_day(interval.start.weekday()) {
                return 0;
            }
            let (window_start, window_end) = schedule.window_for(interval.start.date());
            let overlap_start = interval.start.max(window_start);
            let overlap_end = interval.end.min(window_end);
            if overlap_end > overlap_start {
                minutes_between(overlap_start, overlap_end)
            } else {
                0
            }
        })
        .sum()
}

/// The user-facing free-time window list: schedule filter, then merge.
pub fn available_windows(
    intervals: &[TimeInterval],
    schedule: &WorkSchedule,
) -> Vec<TimeInterval> {
    merge_intervals(&filter_to_schedule(intervals, schedule))
}

/// Compute occupancy for a set of (already schedule-filtered) intervals.
///
/// `total_period_minutes` is the capacity of the evaluation period; when
/// `None` the single-day default `(end_hour - start_hour) * 60` is used.
/// Multi-day capacities are the caller's job (see
/// [`crate::services::capacity`]).
///
/// Sentinels, in order of precedence:
/// - empty interval list: no reported availability means fully booked,
///   `{100, 0}`;
/// - available minutes are clamped to the capacity, so over-reported
///   availability never produces negative busy time;
/// - zero (or negative) capacity: nothing to measure, `{0, 0}` - not an
///   error.
///
/// The percentage is rounded half-away-from-zero and clamped to `[0, 100]`.
pub fn calculate_occupancy(
    intervals: &[TimeInterval],
    schedule: &WorkSchedule,
    total_period_minutes: Option<i64>,
) -> OccupancyResult {
    let total_possible_minutes = total_period_minutes.unwrap_or_else(|| schedule.daily_minutes());

    if intervals.is_empty() {
        return OccupancyResult::fully_booked();
    }

    let merged = merge_intervals(intervals);
    let mut available_minutes = clipped_available_minutes(&merged, schedule);

    if available_minutes > total_possible_minutes {
        available_minutes = total_possible_minutes;
    }

    if total_possible_minutes <= 0 {
        return OccupancyResult::nothing_to_measure();
    }

    let busy_minutes = total_possible_minutes - available_minutes;
    let occupancy = (busy_minutes as f64 / total_possible_minutes as f64 * 100.0).round();

    let available_slots = if schedule.slot_minutes > 0 {
        available_minutes / i64::from(schedule.slot_minutes)
    } else {
        0
    };

    OccupancyResult {
        occupancy_percent: occupancy.clamp(0.0, 100.0) as u8,
        available_minutes,
        available_slots,
    }
}
