//! Source configuration and roster loading.

use std::env;
use std::path::Path;

use serde::Deserialize;

use crate::api::{AgentId, AgentProfile};

const DEFAULT_API_BASE_URL: &str = "https://api.telecalendar.com/api";

/// Upstream availability API configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL of the availability API
    pub api_base_url: String,
    /// Bearer token; `None` means the source is unconfigured
    pub api_token: Option<String>,
    /// Optional IANA time-zone name forwarded to the upstream query
    pub time_zone: Option<String>,
}

impl SourceConfig {
    /// Read the source configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `TAO_API_BASE_URL` (optional): API base URL
    /// - `TAO_API_TOKEN` (optional): bearer token; without it remote fetches
    ///   fail with a configuration error
    /// - `TAO_API_TIMEZONE` (optional): time-zone name forwarded upstream
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("TAO_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            api_token: env::var("TAO_API_TOKEN").ok().filter(|t| !t.is_empty()),
            time_zone: env::var("TAO_API_TIMEZONE").ok().filter(|t| !t.is_empty()),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: None,
            time_zone: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    agents: Vec<AgentProfile>,
}

/// Load the agent roster from a TOML file.
///
/// Expected shape:
///
/// ```toml
/// [[agents]]
/// id = "1"
/// name = "Jens Urbain"
/// event_type_id = "3833131"
/// tag = "Home4You"
///
/// [agents.schedule]
/// working_days = [1, 2, 3, 4, 5]
/// start_hour = 10
/// end_hour = 17
/// slot_minutes = 30
/// ```
pub fn load_roster(path: impl AsRef<Path>) -> anyhow::Result<Vec<AgentProfile>> {
    use anyhow::Context;

    let raw = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read roster file {}", path.as_ref().display()))?;
    let file: RosterFile = toml::from_str(&raw).context("Invalid roster TOML")?;
    Ok(file.agents)
}

/// Built-in roster used when no roster file is configured.
pub fn default_roster() -> Vec<AgentProfile> {
    vec![AgentProfile {
        id: AgentId::new("1"),
        name: "Jens Urbain".to_string(),
        event_type_id: "3833131".to_string(),
        tag: Some("Home4You".to_string()),
        schedule: None,
    }]
}
