//! Error types for availability-source operations.

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Error type for availability-source operations.
///
/// These never escape the service layer: a failed fetch degrades to an
/// empty payload there, and the engine's sentinels take over.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Missing or invalid source configuration (e.g. no API token).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Connection-level failure reaching the upstream API.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Upstream answered with a non-success HTTP status.
    #[error("Upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Payload could not be decoded into a known availability shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl SourceError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Transient failures worth retrying by an outer layer, if any.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_)) || matches!(self, Self::Status { status, .. } if *status >= 500)
    }
}
