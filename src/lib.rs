//! Configuration adapters for remotely hosted assistant agents.
//!
//! Arcturus turns a flat set of caller-supplied options into a validated,
//! normalized configuration bound to a transport client, and hands it to an
//! agent runtime through the [`AgentBase`](arcturus_agents::AgentBase) seam.
//!
//! The crate is split into two layers:
//!
//! - [`arcturus_agents`](agents) — runtime-facing contracts: the normalized
//!   option set, the `AgentBase` capability trait, and the error taxonomy.
//! - [`arcturus_providers`](providers) — provider backends. The `openai`
//!   feature (default) enables the OpenAI Assistants adapter.

pub use arcturus_agents as agents;
pub use arcturus_providers as providers;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use arcturus_agents::{
        AgentBase, AgentError, AgentInitArgs, ConfigurationError, DEFAULT_SERVICE_ID,
        RemoteServiceError,
    };

    #[cfg(feature = "openai")]
    pub use arcturus_providers::openai::{
        AssistantDefinition, AssistantsClient, OpenAiAssistantAgent, OpenAiAssistantAgentBuilder,
    };
}
