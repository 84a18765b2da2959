//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;

use super::dto::{
    AgentListResponse, AgentOccupancyResponse, HealthResponse, OccupancyQuery,
    TeamOccupancyResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::team;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Resolve the requested period, defaulting to today's single-day view.
fn resolve_period(query: &OccupancyQuery) -> Result<(NaiveDate, NaiveDate), AppError> {
    let today = chrono::Local::now().date_naive();
    let start = query.start.unwrap_or(today);
    let end = query.end.unwrap_or(start);
    if end < start {
        return Err(AppError::BadRequest(format!(
            "End date {} precedes start date {}",
            end, start
        )));
    }
    Ok((start, end))
}

/// Validate the optional slot-duration override.
fn resolve_duration(query: &OccupancyQuery) -> Result<Option<u32>, AppError> {
    match query.duration {
        Some(0) => Err(AppError::BadRequest(
            "Slot duration must be a positive number of minutes".to_string(),
        )),
        other => Ok(other),
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// availability source is configured.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let source_status = match state.source.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        source: source_status,
    }))
}

// =============================================================================
// Roster
// =============================================================================

/// GET /v1/agents
///
/// List the agent roster served by this instance.
pub async fn list_agents(State(state): State<AppState>) -> HandlerResult<AgentListResponse> {
    let agents = state.roster.as_ref().clone();
    let total = agents.len();

    Ok(Json(AgentListResponse { agents, total }))
}

// =============================================================================
// Occupancy
// =============================================================================

/// GET /v1/agents/{agent_id}/occupancy
///
/// Occupancy report for a single agent over the requested period.
pub async fn get_agent_occupancy(
    State(state): State<AppState>,
    Path(agent_id): Path<String>,
    Query(query): Query<OccupancyQuery>,
) -> HandlerResult<AgentOccupancyResponse> {
    let (start, end) = resolve_period(&query)?;
    let duration = resolve_duration(&query)?;

    let agent = state
        .roster
        .iter()
        .find(|agent| agent.id.value() == agent_id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown agent '{}'", agent_id)))?;

    let report = team::agent_occupancy(
        state.source.as_ref(),
        agent,
        start,
        end,
        duration,
        &state.default_schedule,
    )
    .await;

    Ok(Json(AgentOccupancyResponse { start, end, report }))
}

/// GET /v1/team/occupancy
///
/// Occupancy reports for the whole roster, plus the rounded mean.
pub async fn get_team_occupancy(
    State(state): State<AppState>,
    Query(query): Query<OccupancyQuery>,
) -> HandlerResult<TeamOccupancyResponse> {
    let (start, end) = resolve_period(&query)?;
    let duration = resolve_duration(&query)?;

    let reports = team::team_occupancy(
        state.source.as_ref(),
        &state.roster,
        start,
        end,
        duration,
        &state.default_schedule,
    )
    .await;

    let average_occupancy = if reports.is_empty() {
        0
    } else {
        let sum: u32 = reports
            .values()
            .map(|r| u32::from(r.occupancy.occupancy_percent))
            .sum();
        (f64::from(sum) / reports.len() as f64).round() as u8
    };

    let agents = reports
        .into_iter()
        .map(|(id, report)| (id.0, report))
        .collect();

    Ok(Json(TeamOccupancyResponse {
        start,
        end,
        average_occupancy,
        agents,
    }))
}
