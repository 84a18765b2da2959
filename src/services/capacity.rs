//! Capacity derivation for multi-day evaluation periods.
//!
//! The engine treats total capacity as an explicit input; this module
//! supplies it for date ranges. The weekday test here must match the
//! engine's schedule filter exactly, otherwise capacity and availability
//! drift apart.

use chrono::{Datelike, NaiveDate};

use crate::api::WorkSchedule;

/// Count days in `[start, end]` (inclusive) whose weekday is in the schedule.
pub fn working_day_count(start: NaiveDate, end: NaiveDate, schedule: &WorkSchedule) -> u32 {
    let mut count = 0;
    let mut current = start;
    while current <= end {
        if schedule.is_working_day(current.weekday()) {
            count += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    count
}

/// Total schedulable minutes for `[start, end]` (inclusive).
///
/// Working-day count times the daily window length. For a single-day view
/// callers may skip this and rely on the engine's one-day default instead.
pub fn capacity_minutes(start: NaiveDate, end: NaiveDate, schedule: &WorkSchedule) -> i64 {
    i64::from(working_day_count(start, end, schedule)) * schedule.daily_minutes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn test_full_week_has_five_working_days() {
        // 2026-01-05 (Mon) through 2026-01-11 (Sun)
        let schedule = WorkSchedule::default();
        assert_eq!(working_day_count(date(5), date(11), &schedule), 5);
    }

    #[test]
    fn test_single_day_range() {
        let schedule = WorkSchedule::default();
        assert_eq!(working_day_count(date(5), date(5), &schedule), 1); // Monday
        assert_eq!(working_day_count(date(4), date(4), &schedule), 0); // Sunday
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let schedule = WorkSchedule::default();
        assert_eq!(working_day_count(date(11), date(5), &schedule), 0);
    }

    #[test]
    fn test_capacity_minutes_multi_day() {
        // Five working days at 420 minutes each
        let schedule = WorkSchedule::default();
        assert_eq!(capacity_minutes(date(5), date(11), &schedule), 2100);
    }

    #[test]
    fn test_capacity_respects_custom_days() {
        // Weekend-only schedule across the same week: Sat 10th + Sun 4th/11th
        let schedule = WorkSchedule::new(vec![0, 6], 9, 13, 30).unwrap();
        assert_eq!(working_day_count(date(4), date(11), &schedule), 3);
        assert_eq!(capacity_minutes(date(4), date(11), &schedule), 3 * 240);
    }

    #[test]
    fn test_january_2026_month_capacity() {
        // January 2026 has 22 Mon-Fri days
        let schedule = WorkSchedule::default();
        assert_eq!(working_day_count(date(1), date(31), &schedule), 22);
        assert_eq!(capacity_minutes(date(1), date(31), &schedule), 22 * 420);
    }
}
