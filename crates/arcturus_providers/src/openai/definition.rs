//! Translation of remote assistant records into configuration shape.

use super::types::{Assistant, AssistantTool};
use serde_json::{Map, Value};

/// A remote assistant record translated into the adapter's configuration
/// shape.
///
/// Ephemeral: produced per list/retrieve call and consumed into a new agent
/// immediately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssistantDefinition {
    /// The model the assistant runs on.
    pub ai_model_id: String,
    /// Service-assigned assistant ID.
    pub id: String,
    /// Assistant name.
    pub name: Option<String>,
    /// Assistant description.
    pub description: Option<String>,
    /// System instructions.
    pub instructions: Option<String>,
    /// Whether the code interpreter tool is enabled.
    pub enable_code_interpreter: bool,
    /// Whether the file search tool is enabled.
    pub enable_file_search: bool,
    /// Whether responses are constrained to JSON.
    pub enable_json_response: bool,
    /// Files attached to the code interpreter tool.
    pub file_ids: Vec<String>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,
    /// First vector store attached to the file search tool.
    pub vector_store_id: Option<String>,
    /// Free-form metadata.
    pub metadata: Map<String, Value>,
}

impl From<Assistant> for AssistantDefinition {
    fn from(assistant: Assistant) -> Self {
        let enable_code_interpreter =
            assistant.tools.contains(&AssistantTool::CodeInterpreter);
        let enable_file_search = assistant.tools.contains(&AssistantTool::FileSearch);
        let enable_json_response = assistant
            .response_format
            .as_ref()
            .is_some_and(super::types::AssistantResponseFormat::is_json);

        let (file_ids, vector_store_id) = match assistant.tool_resources {
            Some(resources) => (
                resources
                    .code_interpreter
                    .map(|ci| ci.file_ids)
                    .unwrap_or_default(),
                resources
                    .file_search
                    .and_then(|fs| fs.vector_store_ids.into_iter().next()),
            ),
            None => (Vec::new(), None),
        };

        Self {
            ai_model_id: assistant.model,
            id: assistant.id,
            name: assistant.name,
            description: assistant.description,
            instructions: assistant.instructions,
            enable_code_interpreter,
            enable_file_search,
            enable_json_response,
            file_ids,
            temperature: assistant.temperature,
            top_p: assistant.top_p,
            vector_store_id,
            metadata: assistant.metadata,
        }
    }
}
