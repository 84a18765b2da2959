//! Per-agent and per-team occupancy orchestration.
//!
//! Each agent's report is an independent computation closing only over its
//! own inputs, so the team view simply fans out one future per agent and
//! awaits them all. An upstream fetch failure degrades that agent to an
//! empty payload, which the engine's empty-input sentinel absorbs as
//! "fully booked" rather than an error.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::algorithms::{calculate_occupancy, filter_to_schedule, merge_intervals};
use crate::api::{AgentId, AgentProfile, OccupancyResult, TimeInterval, WorkSchedule};
use crate::models::availability::{normalize_availability, RawAvailability};
use crate::services::capacity::capacity_minutes;
use crate::source::{AvailabilityQuery, AvailabilitySource};

/// One agent's occupancy report over an evaluation period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentOccupancy {
    /// Roster identifier
    pub agent_id: AgentId,
    /// Display name
    pub name: String,
    /// Optional team/brand tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Occupancy figures for the period
    pub occupancy: OccupancyResult,
    /// Free-time windows within the agent's schedule, merged and ordered
    pub windows: Vec<TimeInterval>,
}

/// Compute one agent's occupancy report for `[start, end]` (inclusive).
///
/// Fetches the agent's reported availability, normalizes and
/// schedule-filters it, and runs the occupancy engine against the period
/// capacity. A single-day period uses the one-day window capacity even on
/// a non-working day, matching the day view the dashboard renders.
///
/// `slot_duration` overrides the schedule's slot length for the upstream
/// query, the end-repair fallback, and the slot count; `None` (or a zero
/// override) keeps the schedule's own value.
pub async fn agent_occupancy(
    source: &dyn AvailabilitySource,
    agent: &AgentProfile,
    start: NaiveDate,
    end: NaiveDate,
    slot_duration: Option<u32>,
    default_schedule: &WorkSchedule,
) -> AgentOccupancy {
    let mut schedule = agent.schedule_or(default_schedule).clone();
    if let Some(minutes) = slot_duration.filter(|minutes| *minutes > 0) {
        schedule.slot_minutes = minutes;
    }

    let total_minutes = if start == end {
        schedule.daily_minutes()
    } else {
        capacity_minutes(start, end, &schedule)
    };

    let query = AvailabilityQuery::new(&agent.event_type_id, start, end, schedule.slot_minutes);
    let payload = match source.fetch_available(&query).await {
        Ok(payload) => payload,
        Err(err) => {
            log::warn!(
                "availability fetch failed for agent {} ({}): {}",
                agent.id,
                agent.event_type_id,
                err
            );
            RawAvailability::empty()
        }
    };

    let normalized = normalize_availability(payload, schedule.slot_minutes);
    let filtered = filter_to_schedule(&normalized, &schedule);
    let windows = merge_intervals(&filtered);
    let occupancy = calculate_occupancy(&filtered, &schedule, Some(total_minutes));

    AgentOccupancy {
        agent_id: agent.id.clone(),
        name: agent.name.clone(),
        tag: agent.tag.clone(),
        occupancy,
        windows,
    }
}

/// Fan out one independent computation per agent and assemble the mapping.
pub async fn team_occupancy(
    source: &dyn AvailabilitySource,
    agents: &[AgentProfile],
    start: NaiveDate,
    end: NaiveDate,
    slot_duration: Option<u32>,
    default_schedule: &WorkSchedule,
) -> HashMap<AgentId, AgentOccupancy> {
    let reports = futures::future::join_all(agents.iter().map(|agent| {
        agent_occupancy(source, agent, start, end, slot_duration, default_schedule)
    }))
    .await;

    reports
        .into_iter()
        .map(|report| (report.agent_id.clone(), report))
        .collect()
}
