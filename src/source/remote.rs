//! HTTPS client for the live availability API.
//!
//! Queries the upstream `time-slots` endpoint with `format=range` so the
//! response arrives as consolidated ranges. The payload may be wrapped in a
//! `{"data": ...}` envelope or delivered bare; both are tolerated.

use async_trait::async_trait;
use serde_json::Value;

use crate::models::availability::RawAvailability;
use crate::source::{AvailabilityQuery, AvailabilitySource, SourceConfig, SourceError, SourceResult};

/// Availability source backed by the remote HTTP API.
pub struct RemoteSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl RemoteSource {
    pub fn new(config: SourceConfig) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SourceError::configuration(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn token(&self) -> SourceResult<&str> {
        self.config
            .api_token
            .as_deref()
            .ok_or_else(|| SourceError::configuration("API token is missing"))
    }
}

#[async_trait]
impl AvailabilitySource for RemoteSource {
    async fn fetch_available(&self, query: &AvailabilityQuery) -> SourceResult<RawAvailability> {
        let token = self.token()?;

        let url = format!("{}/time-slots", self.config.api_base_url.trim_end_matches('/'));
        let mut params = vec![
            ("eventTypeId", query.event_type_id.clone()),
            ("start", query.start.format("%Y-%m-%d").to_string()),
            ("end", query.end.format("%Y-%m-%d").to_string()),
            ("duration", query.duration_minutes.to_string()),
            ("format", "range".to_string()),
        ];
        if let Some(tz) = &self.config.time_zone {
            params.push(("timeZone", tz.clone()));
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .bearer_auth(token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::status(status.as_u16(), body));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| SourceError::decode(e.to_string()))?;

        // The API wraps payloads in {"data": ...} on some deployments.
        let raw = match value {
            Value::Object(ref map) if map.contains_key("data") => value["data"].clone(),
            other => other,
        };

        serde_json::from_value(raw).map_err(|e| SourceError::decode(e.to_string()))
    }

    async fn health_check(&self) -> SourceResult<bool> {
        Ok(self.config.api_token.is_some())
    }
}
