//! Provider adapters for hosted assistant services.
//!
//! Each provider translates Arcturus agent configuration into the wire
//! format of one hosted-assistant API and binds a transport client for the
//! agent's lifetime.
//!
//! # Supported Providers
//!
//! | Provider | Feature Flag | Description |
//! |----------|--------------|-------------|
//! | `OpenAI` | `openai` (default) | `OpenAI` Assistants API (v2) |
//!
//! # Feature Flags
//!
//! Each provider is gated behind a feature flag to avoid pulling in
//! unnecessary dependencies.
//!
//! ```toml
//! # Enable only OpenAI (default)
//! arcturus_providers = { path = "../arcturus_providers" }
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use arcturus_providers::openai::OpenAiAssistantAgent;
//!
//! # fn run() -> Result<(), arcturus_agents::AgentError> {
//! let agent = OpenAiAssistantAgent::builder()
//!     .api_key("sk-...")
//!     .ai_model_id("gpt-4o")
//!     .name("researcher")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "openai")]
mod telemetry;

#[cfg(feature = "openai")]
pub mod openai;

#[cfg(feature = "openai")]
pub use openai::OpenAiAssistantAgent;
