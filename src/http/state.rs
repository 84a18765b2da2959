//! Application state for the HTTP server.

use std::sync::Arc;

use crate::api::{AgentProfile, WorkSchedule};
use crate::source::AvailabilitySource;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Availability source instance
    pub source: Arc<dyn AvailabilitySource>,
    /// Agent roster served by this instance
    pub roster: Arc<Vec<AgentProfile>>,
    /// Schedule applied to agents without one of their own
    pub default_schedule: WorkSchedule,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        source: Arc<dyn AvailabilitySource>,
        roster: Vec<AgentProfile>,
        default_schedule: WorkSchedule,
    ) -> Self {
        Self {
            source,
            roster: Arc::new(roster),
            default_schedule,
        }
    }
}
