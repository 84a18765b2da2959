//! In-memory availability source for unit testing and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::models::availability::RawAvailability;
use crate::source::{AvailabilityQuery, AvailabilitySource, SourceError, SourceResult};

/// In-memory source: payloads keyed by event-type identifier.
///
/// Unknown identifiers yield an empty payload, mirroring an agent with no
/// reported availability. `set_failing` simulates an unreachable upstream
/// for degradation tests.
#[derive(Default)]
pub struct LocalSource {
    payloads: RwLock<HashMap<String, RawAvailability>>,
    failing: RwLock<bool>,
}

impl LocalSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the payload returned for an event-type identifier.
    pub fn insert_payload(&self, event_type_id: impl Into<String>, payload: RawAvailability) {
        self.payloads.write().insert(event_type_id.into(), payload);
    }

    /// Make every subsequent fetch fail with a transport error.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.write() = failing;
    }
}

#[async_trait]
impl AvailabilitySource for LocalSource {
    async fn fetch_available(&self, query: &AvailabilityQuery) -> SourceResult<RawAvailability> {
        if *self.failing.read() {
            return Err(SourceError::transport("local source set to failing"));
        }
        Ok(self
            .payloads
            .read()
            .get(&query.event_type_id)
            .cloned()
            .unwrap_or_else(RawAvailability::empty))
    }

    async fn health_check(&self) -> SourceResult<bool> {
        Ok(!*self.failing.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::availability::RawSlot;
    use chrono::NaiveDate;

    fn query(event_type_id: &str) -> AvailabilityQuery {
        let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        AvailabilityQuery::new(event_type_id, day, day, 30)
    }

    #[tokio::test]
    async fn test_unknown_event_type_yields_empty() {
        let source = LocalSource::new();
        let payload = source.fetch_available(&query("unknown")).await.unwrap();
        assert!(payload.is_empty());
    }

    #[tokio::test]
    async fn test_registered_payload_is_returned() {
        let source = LocalSource::new();
        source.insert_payload(
            "evt",
            RawAvailability::Flat(vec![RawSlot {
                start: "2026-01-05T10:00:00".to_string(),
                end: None,
            }]),
        );
        let payload = source.fetch_available(&query("evt")).await.unwrap();
        assert!(!payload.is_empty());
    }

    #[tokio::test]
    async fn test_failing_mode() {
        let source = LocalSource::new();
        source.set_failing(true);
        assert!(source.fetch_available(&query("evt")).await.is_err());
        assert!(!source.health_check().await.unwrap());

        source.set_failing(false);
        assert!(source.fetch_available(&query("evt")).await.is_ok());
    }
}
