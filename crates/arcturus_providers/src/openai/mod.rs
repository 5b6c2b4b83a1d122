//! `OpenAI` assistant provider backend.
//!
//! Uses the `OpenAI` Assistants API (v2).
//!
//! ```no_run
//! # use arcturus_providers::openai::OpenAiAssistantAgent;
//! # fn run() -> Result<(), arcturus_agents::AgentError> {
//! let agent = OpenAiAssistantAgent::builder()
//!     .api_key("sk-...")
//!     .ai_model_id("gpt-4o")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod agent;
mod client;
mod definition;
mod settings;
mod types;

pub use agent::{OpenAiAssistantAgent, OpenAiAssistantAgentBuilder};
pub use client::AssistantsClient;
pub use definition::AssistantDefinition;
pub use settings::OpenAiSettings;
pub use types::{
    Assistant, AssistantList, AssistantResponseFormat, AssistantTool, CodeInterpreterResources,
    CreateAssistantRequest, FileSearchResources, ListAssistantsQuery, ListOrder,
    ResponseFormatKind, ResponseFormatSpec, ToolResources,
};
