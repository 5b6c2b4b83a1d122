//! Error types for agent configuration and remote operations.

use core::time::Duration;

/// Errors raised while resolving agent configuration.
///
/// These are always surfaced synchronously, before any network call, and are
/// never retried.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Settings could not be loaded or parsed.
    #[error("failed to load settings: {0}")]
    Settings(String),

    /// No API key was resolvable and no client was supplied.
    #[error("an API key is required when no client is provided")]
    MissingApiKey,

    /// No model ID was resolvable from the supplied options or environment.
    #[error("a model ID is required")]
    MissingModelId,

    /// A header name or value could not be encoded for the transport.
    #[error("invalid header {name}: {message}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why the header was rejected.
        message: String,
    },
}

/// Errors surfaced by the remote assistant service.
///
/// Transport failures are wrapped, not swallowed. No retry policy lives at
/// this layer; retry, if any, belongs to the transport or a higher layer.
#[derive(Debug, thiserror::Error)]
pub enum RemoteServiceError {
    /// Http error (e.g.: connection error, timeout, etc.)
    #[error("http error: {0}")]
    Http(String),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Authentication failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Rate limited by the service.
    #[error("rate limited{}", .retry_after.map(|d| format!(", retry after {d:?}")).unwrap_or_default())]
    RateLimited {
        /// Suggested time to wait before retrying.
        retry_after: Option<Duration>,
    },

    /// Error returned by the service.
    #[error("service error: {message}")]
    Service {
        /// HTTP status code if available.
        status: Option<u16>,
        /// Error message.
        message: String,
        /// The underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Top-level error for agent operations.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// Configuration could not be resolved.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The remote service reported a failure.
    #[error(transparent)]
    Remote(#[from] RemoteServiceError),
}
