//! Service layer for business logic and orchestration.
//!
//! Services sit between the availability-source boundary and the HTTP
//! handlers: capacity derivation for date ranges and the per-team fan-out
//! that assembles one occupancy report per agent.

pub mod capacity;
pub mod team;

pub use capacity::{capacity_minutes, working_day_count};
pub use team::{agent_occupancy, team_occupancy, AgentOccupancy};
