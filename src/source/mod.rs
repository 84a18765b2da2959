//! Availability-source boundary.
//!
//! The upstream booking system is modeled behind the [`AvailabilitySource`]
//! trait so the engine and services never care where payloads come from:
//!
//! - `local`: In-memory implementation for unit testing and local development
//! - `remote`: HTTPS client against the live availability API
//!
//! Network transport, authentication, and error surfacing live entirely on
//! this side of the boundary; the service layer reduces any failure to an
//! empty payload.

// Feature flag priority: remote > local
// When multiple features are enabled (e.g., --all-features), remote takes precedence.
#[cfg(not(any(feature = "remote-source", feature = "local-source")))]
compile_error!("Enable at least one availability-source backend feature.");

pub mod config;
pub mod error;

pub mod local;
#[cfg(feature = "remote-source")]
pub mod remote;

pub use config::{default_roster, load_roster, SourceConfig};
pub use error::{SourceError, SourceResult};
pub use local::LocalSource;
#[cfg(feature = "remote-source")]
pub use remote::RemoteSource;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::availability::RawAvailability;

/// Query for one agent's reported availability over a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    /// Upstream event-type identifier for the agent
    pub event_type_id: String,
    /// First day of the range (inclusive)
    pub start: NaiveDate,
    /// Last day of the range (inclusive)
    pub end: NaiveDate,
    /// Slot duration hint forwarded to the upstream consolidation
    pub duration_minutes: u32,
}

impl AvailabilityQuery {
    pub fn new(
        event_type_id: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        duration_minutes: u32,
    ) -> Self {
        Self {
            event_type_id: event_type_id.into(),
            start,
            end,
            duration_minutes,
        }
    }
}

/// Abstract availability source.
///
/// Implementations must be cheap to share (`Arc<dyn AvailabilitySource>`)
/// and safe to query concurrently for different agents.
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// Fetch the raw availability payload for one query.
    async fn fetch_available(&self, query: &AvailabilityQuery) -> SourceResult<RawAvailability>;

    /// Whether the source is reachable and configured.
    async fn health_check(&self) -> SourceResult<bool> {
        Ok(true)
    }
}

// Priority: remote > local (when --all-features is used)
#[cfg(feature = "remote-source")]
pub fn create_default_source() -> SourceResult<Arc<dyn AvailabilitySource>> {
    let config = SourceConfig::from_env();
    Ok(Arc::new(RemoteSource::new(config)?))
}

/// Build the availability source selected by the enabled features.
#[cfg(all(feature = "local-source", not(feature = "remote-source")))]
pub fn create_default_source() -> SourceResult<Arc<dyn AvailabilitySource>> {
    Ok(Arc::new(LocalSource::new()))
}
