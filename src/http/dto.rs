//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The report types from the service layer already derive
//! Serialize/Deserialize and are re-exported as-is.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{AgentProfile, OccupancyResult, TimeInterval, WorkSchedule};
pub use crate::services::team::AgentOccupancy;

/// Query parameters for the occupancy endpoints.
///
/// Dates are `YYYY-MM-DD`; a missing range defaults to today/today, the
/// single-day view. `duration` overrides the slot length in minutes; when
/// absent the agent's schedule supplies it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OccupancyQuery {
    /// First day of the evaluation period (inclusive)
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Last day of the evaluation period (inclusive)
    #[serde(default)]
    pub end: Option<NaiveDate>,
    /// Slot duration override, in minutes
    #[serde(default)]
    pub duration: Option<u32>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Availability-source status
    pub source: String,
}

/// Agent roster response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentListResponse {
    /// Roster entries
    pub agents: Vec<AgentProfile>,
    /// Total count
    pub total: usize,
}

/// Single-agent occupancy response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentOccupancyResponse {
    /// First day of the evaluated period
    pub start: NaiveDate,
    /// Last day of the evaluated period
    pub end: NaiveDate,
    /// The agent's report
    #[serde(flatten)]
    pub report: AgentOccupancy,
}

/// Team occupancy response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamOccupancyResponse {
    /// First day of the evaluated period
    pub start: NaiveDate,
    /// Last day of the evaluated period
    pub end: NaiveDate,
    /// Mean occupancy across the roster, rounded
    pub average_occupancy: u8,
    /// Reports keyed by agent id
    pub agents: BTreeMap<String, AgentOccupancy>,
}
