//! `OpenAI` Assistants API types.
//!
//! These types match the Assistants API (v2) specification.
//! See: <https://platform.openai.com/docs/api-reference/assistants>

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─────────────────────────────────────────────────────────────────────────────
// Request Types
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for creating an assistant.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAssistantRequest {
    /// The model the assistant runs on.
    pub model: String,
    /// Assistant name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Assistant description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// System instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Enabled tools.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<AssistantTool>,
    /// Resources backing the enabled tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_resources: Option<ToolResources>,
    /// Free-form metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Nucleus sampling parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// Response format constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<AssistantResponseFormat>,
}

/// A tool enabled on an assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssistantTool {
    /// Sandboxed code execution.
    CodeInterpreter,
    /// Retrieval over attached vector stores.
    FileSearch,
}

/// Resources available to an assistant's tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolResources {
    /// Code interpreter resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_interpreter: Option<CodeInterpreterResources>,
    /// File search resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_search: Option<FileSearchResources>,
}

/// Files attached to the code interpreter tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeInterpreterResources {
    /// IDs of files the tool can read.
    #[serde(default)]
    pub file_ids: Vec<String>,
}

/// Vector stores attached to the file search tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileSearchResources {
    /// IDs of attached vector stores.
    #[serde(default)]
    pub vector_store_ids: Vec<String>,
}

/// `response_format` accepts either the literal `"auto"` or a typed object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssistantResponseFormat {
    /// The literal mode string, e.g. `"auto"`.
    Mode(String),
    /// A typed format object, e.g. `{"type": "json_object"}`.
    Format(ResponseFormatSpec),
}

impl AssistantResponseFormat {
    /// Whether this format forces JSON responses.
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(
            self,
            Self::Format(ResponseFormatSpec {
                kind: ResponseFormatKind::JsonObject,
            })
        )
    }
}

/// Typed response format object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFormatSpec {
    /// The format discriminator.
    #[serde(rename = "type")]
    pub kind: ResponseFormatKind,
}

/// Response format discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormatKind {
    /// Plain text responses.
    Text,
    /// Valid-JSON responses.
    JsonObject,
}

/// Query parameters for listing assistants.
#[derive(Debug, Clone, Serialize)]
pub struct ListAssistantsQuery {
    /// Sort order by creation time.
    pub order: ListOrder,
    /// Page size (the service caps this).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,
    /// Cursor: return records after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Cursor: return records before this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl Default for ListAssistantsQuery {
    fn default() -> Self {
        Self {
            order: ListOrder::Desc,
            limit: None,
            after: None,
            before: None,
        }
    }
}

/// Sort order for list calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    Desc,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// An assistant record as returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Assistant {
    /// Service-assigned identifier.
    pub id: String,
    /// Object discriminator, always `"assistant"`.
    pub object: String,
    /// Creation time (unix seconds).
    pub created_at: i64,
    /// Assistant name.
    pub name: Option<String>,
    /// Assistant description.
    pub description: Option<String>,
    /// The model the assistant runs on.
    pub model: String,
    /// System instructions.
    pub instructions: Option<String>,
    /// Enabled tools.
    #[serde(default)]
    pub tools: Vec<AssistantTool>,
    /// Resources backing the enabled tools.
    #[serde(default)]
    pub tool_resources: Option<ToolResources>,
    /// Free-form metadata.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,
    /// Response format constraint.
    #[serde(default)]
    pub response_format: Option<AssistantResponseFormat>,
}

/// One page of assistant records.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantList {
    /// Object discriminator, always `"list"`.
    pub object: String,
    /// The records on this page.
    pub data: Vec<Assistant>,
    /// ID of the first record on the page.
    pub first_id: Option<String>,
    /// ID of the last record on the page (cursor for the next page).
    pub last_id: Option<String>,
    /// Whether another page exists.
    #[serde(default)]
    pub has_more: bool,
}

/// Error envelope returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// The error payload.
    pub error: ApiError,
}

/// Error payload returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Human-readable message.
    pub message: String,
    /// Error category.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Machine-readable code.
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tools_serialize_with_type_tag() {
        let tools = vec![AssistantTool::CodeInterpreter, AssistantTool::FileSearch];
        assert_eq!(
            serde_json::to_value(&tools).unwrap(),
            json!([{"type": "code_interpreter"}, {"type": "file_search"}])
        );
    }

    #[test]
    fn response_format_parses_both_shapes() {
        let auto: AssistantResponseFormat = serde_json::from_value(json!("auto")).unwrap();
        assert!(!auto.is_json());

        let object: AssistantResponseFormat =
            serde_json::from_value(json!({"type": "json_object"})).unwrap();
        assert!(object.is_json());
    }

    #[test]
    fn create_request_omits_unset_fields() {
        let request = CreateAssistantRequest {
            model: "gpt-4o".into(),
            name: None,
            description: None,
            instructions: None,
            tools: Vec::new(),
            tool_resources: None,
            metadata: None,
            temperature: None,
            top_p: None,
            response_format: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"model": "gpt-4o"}));
    }

    #[test]
    fn assistant_record_parses_service_shape() {
        let assistant: Assistant = serde_json::from_value(json!({
            "id": "asst_abc123",
            "object": "assistant",
            "created_at": 1_698_984_975,
            "name": "Math Tutor",
            "description": null,
            "model": "gpt-4o",
            "instructions": "You are a tutor.",
            "tools": [{"type": "code_interpreter"}],
            "tool_resources": {"code_interpreter": {"file_ids": ["file-1"]}},
            "metadata": {"team": "edu"},
            "temperature": 1.0,
            "top_p": 1.0,
            "response_format": "auto"
        }))
        .unwrap();

        assert_eq!(assistant.id, "asst_abc123");
        assert_eq!(assistant.tools, vec![AssistantTool::CodeInterpreter]);
        let resources = assistant.tool_resources.unwrap();
        assert_eq!(
            resources.code_interpreter.unwrap().file_ids,
            vec!["file-1".to_string()]
        );
    }

    #[test]
    fn list_query_serializes_cursor_params() {
        let query = ListAssistantsQuery {
            limit: Some(20),
            after: Some("asst_1".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"order": "desc", "limit": 20, "after": "asst_1"})
        );
    }
}
