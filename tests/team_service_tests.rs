//! Service-level tests: fan-out, capacity handling, and fetch degradation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use tao_rust::api::{AgentId, AgentProfile, WorkSchedule};
use tao_rust::models::availability::{RawAvailability, RawSlot};
use tao_rust::services::{agent_occupancy, capacity_minutes, team_occupancy};
use tao_rust::source::LocalSource;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
}

fn profile(id: &str, event_type_id: &str, schedule: Option<WorkSchedule>) -> AgentProfile {
    AgentProfile {
        id: AgentId::new(id),
        name: format!("Agent {}", id),
        event_type_id: event_type_id.to_string(),
        tag: Some("Home4You".to_string()),
        schedule,
    }
}

fn slot(start: &str, end: &str) -> RawSlot {
    RawSlot {
        start: start.to_string(),
        end: Some(end.to_string()),
    }
}

#[tokio::test]
async fn fetch_failure_degrades_to_fully_booked() {
    let source = LocalSource::new();
    source.set_failing(true);

    let report = agent_occupancy(
        &source,
        &profile("1", "evt", None),
        date(5),
        date(5),
        None,
        &WorkSchedule::default(),
    )
    .await;

    assert_eq!(report.occupancy.occupancy_percent, 100);
    assert_eq!(report.occupancy.available_minutes, 0);
    assert!(report.windows.is_empty());
}

#[tokio::test]
async fn week_view_uses_working_day_capacity() {
    let source = LocalSource::new();
    // One fully free working day within the week
    source.insert_payload(
        "evt",
        RawAvailability::Flat(vec![slot("2026-01-05T10:00:00", "2026-01-05T17:00:00")]),
    );

    let schedule = WorkSchedule::default();
    // Mon 5th .. Sun 11th: five working days, 2100 minutes
    assert_eq!(capacity_minutes(date(5), date(11), &schedule), 2100);

    let report = agent_occupancy(
        &source,
        &profile("1", "evt", None),
        date(5),
        date(11),
        None,
        &schedule,
    )
    .await;

    assert_eq!(report.occupancy.available_minutes, 420);
    // round((2100 - 420) / 2100 * 100) = 80
    assert_eq!(report.occupancy.occupancy_percent, 80);
}

#[tokio::test]
async fn date_keyed_payload_is_accepted() {
    let source = LocalSource::new();
    let mut groups = BTreeMap::new();
    groups.insert(
        "2026-01-05".to_string(),
        vec![slot("2026-01-05T10:00:00", "2026-01-05T12:00:00")],
    );
    groups.insert(
        "2026-01-06".to_string(),
        vec![slot("2026-01-06T10:00:00", "2026-01-06T12:00:00")],
    );
    source.insert_payload("evt", RawAvailability::ByDate(groups));

    let report = agent_occupancy(
        &source,
        &profile("1", "evt", None),
        date(5),
        date(6),
        None,
        &WorkSchedule::default(),
    )
    .await;

    assert_eq!(report.occupancy.available_minutes, 240);
    assert_eq!(report.windows.len(), 2);
}

#[tokio::test]
async fn agent_schedule_overrides_default() {
    let source = LocalSource::new();
    // Saturday slot: outside the default schedule, inside the custom one
    source.insert_payload(
        "evt",
        RawAvailability::Flat(vec![slot("2026-01-10T09:00:00", "2026-01-10T10:00:00")]),
    );

    let weekend = WorkSchedule::new(vec![0, 6], 9, 13, 30).unwrap();
    let report = agent_occupancy(
        &source,
        &profile("1", "evt", Some(weekend)),
        date(10),
        date(10),
        None,
        &WorkSchedule::default(),
    )
    .await;

    assert_eq!(report.occupancy.available_minutes, 60);
    // Single-day view: capacity is the custom 4-hour window
    // round((240 - 60) / 240 * 100) = 75
    assert_eq!(report.occupancy.occupancy_percent, 75);
}

#[tokio::test]
async fn single_day_on_non_working_day_keeps_day_capacity() {
    let source = LocalSource::new();

    // Sunday with no slots: the day view still measures one day's window
    let report = agent_occupancy(
        &source,
        &profile("1", "evt", None),
        date(4),
        date(4),
        None,
        &WorkSchedule::default(),
    )
    .await;

    assert_eq!(report.occupancy.occupancy_percent, 100);
}

#[tokio::test]
async fn duration_override_replaces_schedule_slot_length() {
    let source = LocalSource::new();
    // Two hours free on a Monday, 10:00-12:00
    source.insert_payload(
        "evt",
        RawAvailability::Flat(vec![slot("2026-01-05T10:00:00", "2026-01-05T12:00:00")]),
    );

    let report = agent_occupancy(
        &source,
        &profile("1", "evt", None),
        date(5),
        date(5),
        Some(60),
        &WorkSchedule::default(),
    )
    .await;

    // 120 free minutes counted as two 60-minute slots instead of four
    assert_eq!(report.occupancy.available_minutes, 120);
    assert_eq!(report.occupancy.available_slots, 2);
}

#[tokio::test]
async fn team_report_covers_whole_roster() {
    let source = LocalSource::new();
    source.insert_payload(
        "evt-free",
        RawAvailability::Flat(vec![slot("2026-01-05T10:00:00", "2026-01-05T17:00:00")]),
    );

    let agents = vec![
        profile("free", "evt-free", None),
        profile("booked", "evt-booked", None),
    ];

    let reports =
        team_occupancy(&source, &agents, date(5), date(5), None, &WorkSchedule::default()).await;

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[&AgentId::new("free")].occupancy.occupancy_percent, 0);
    assert_eq!(
        reports[&AgentId::new("booked")].occupancy.occupancy_percent,
        100
    );
    assert_eq!(reports[&AgentId::new("free")].tag.as_deref(), Some("Home4You"));
}
