//! The normalized option set handed to an agent runtime.

use serde_json::{Map, Value};

/// Service ID used when the caller does not supply one.
pub const DEFAULT_SERVICE_ID: &str = "default";

/// The normalized option set a configuration adapter produces for an agent
/// runtime, independent of how the caller supplied its inputs.
///
/// `C` is the transport client handle; it is opaque to this crate. Exactly
/// one client is bound to the args (and therefore to the agent built from
/// them) for the agent's lifetime.
///
/// Identity fields (`name`, `id`) distinguish "unset" from "present but
/// empty": they are `Option`s here and are omitted from [`to_map`] entirely
/// when the caller never supplied them. All other optional fields forward as
/// explicit nulls, matching the runtime initializer contract.
///
/// [`to_map`]: AgentInitArgs::to_map
#[derive(Debug, Clone)]
pub struct AgentInitArgs<C> {
    /// The model the agent runs on.
    pub ai_model_id: String,
    /// The service the agent is registered under.
    pub service_id: String,
    /// The bound transport client.
    pub client: C,
    /// Assistant description.
    pub description: Option<String>,
    /// Assistant instructions.
    pub instructions: Option<String>,
    /// Enable the code interpreter tool.
    pub enable_code_interpreter: Option<bool>,
    /// Enable the file search tool.
    pub enable_file_search: Option<bool>,
    /// Force JSON responses.
    pub enable_json_response: Option<bool>,
    /// Files available to the code interpreter tool.
    pub file_ids: Vec<String>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,
    /// Vector store backing the file search tool.
    pub vector_store_id: Option<String>,
    /// Free-form assistant metadata.
    pub metadata: Map<String, Value>,
    /// Completion token limit.
    pub max_completion_tokens: Option<u32>,
    /// Prompt token limit.
    pub max_prompt_tokens: Option<u32>,
    /// Whether the model may issue tool calls in parallel.
    pub parallel_tool_calls_enabled: bool,
    /// Number of recent messages kept when truncating a thread.
    pub truncation_message_count: Option<u32>,
    /// Assistant name; forwarded only when the caller supplied one.
    pub name: Option<String>,
    /// Assistant ID; forwarded only when the caller supplied one.
    pub id: Option<String>,
    /// Caller extension fields, applied last; they override the named
    /// fields on key collision.
    pub extra: Map<String, Value>,
}

impl<C> AgentInitArgs<C> {
    /// Creates a minimal option set with everything else unset.
    pub fn new(
        ai_model_id: impl Into<String>,
        service_id: impl Into<String>,
        client: C,
    ) -> Self {
        Self {
            ai_model_id: ai_model_id.into(),
            service_id: service_id.into(),
            client,
            description: None,
            instructions: None,
            enable_code_interpreter: None,
            enable_file_search: None,
            enable_json_response: None,
            file_ids: Vec::new(),
            temperature: None,
            top_p: None,
            vector_store_id: None,
            metadata: Map::new(),
            max_completion_tokens: None,
            max_prompt_tokens: None,
            parallel_tool_calls_enabled: true,
            truncation_message_count: None,
            name: None,
            id: None,
            extra: Map::new(),
        }
    }

    /// Renders the option set as the flat key/value map forwarded to the
    /// runtime initializer.
    ///
    /// The client handle has no value representation and is not part of the
    /// map. `name` and `id` appear only when set; extension fields are
    /// inserted last and win on key collision.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("ai_model_id".into(), Value::from(self.ai_model_id.clone()));
        map.insert("service_id".into(), Value::from(self.service_id.clone()));
        map.insert("description".into(), opt_str(&self.description));
        map.insert("instructions".into(), opt_str(&self.instructions));
        map.insert(
            "enable_code_interpreter".into(),
            opt_value(self.enable_code_interpreter),
        );
        map.insert(
            "enable_file_search".into(),
            opt_value(self.enable_file_search),
        );
        map.insert(
            "enable_json_response".into(),
            opt_value(self.enable_json_response),
        );
        map.insert("file_ids".into(), Value::from(self.file_ids.clone()));
        map.insert("temperature".into(), opt_value(self.temperature));
        map.insert("top_p".into(), opt_value(self.top_p));
        map.insert("vector_store_id".into(), opt_str(&self.vector_store_id));
        map.insert("metadata".into(), Value::Object(self.metadata.clone()));
        map.insert(
            "max_completion_tokens".into(),
            opt_value(self.max_completion_tokens),
        );
        map.insert("max_prompt_tokens".into(), opt_value(self.max_prompt_tokens));
        map.insert(
            "parallel_tool_calls_enabled".into(),
            Value::from(self.parallel_tool_calls_enabled),
        );
        map.insert(
            "truncation_message_count".into(),
            opt_value(self.truncation_message_count),
        );

        if let Some(name) = &self.name {
            map.insert("name".into(), Value::from(name.clone()));
        }
        if let Some(id) = &self.id {
            map.insert("id".into(), Value::from(id.clone()));
        }

        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }

        map
    }
}

fn opt_str(value: &Option<String>) -> Value {
    value.as_ref().map_or(Value::Null, |v| Value::from(v.clone()))
}

fn opt_value<T: Into<Value>>(value: Option<T>) -> Value {
    value.map_or(Value::Null, Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args() -> AgentInitArgs<()> {
        AgentInitArgs::new("gpt-4", DEFAULT_SERVICE_ID, ())
    }

    #[test]
    fn identity_fields_absent_when_unset() {
        let map = args().to_map();
        assert!(!map.contains_key("name"));
        assert!(!map.contains_key("id"));
        // Other optional fields forward as explicit nulls.
        assert_eq!(map.get("description"), Some(&Value::Null));
    }

    #[test]
    fn identity_fields_round_trip_when_set() {
        let mut args = args();
        args.name = Some("x".into());
        let map = args.to_map();
        assert_eq!(map.get("name"), Some(&json!("x")));
        assert!(!map.contains_key("id"));
    }

    #[test]
    fn empty_name_is_forwarded_not_dropped() {
        let mut args = args();
        args.name = Some(String::new());
        assert_eq!(args.to_map().get("name"), Some(&json!("")));
    }

    #[test]
    fn extension_fields_override_named_fields() {
        let mut args = args();
        args.extra.insert("temperature".into(), json!(0.9));
        args.extra.insert("plugin_slot".into(), json!("alpha"));
        let map = args.to_map();
        assert_eq!(map.get("temperature"), Some(&json!(0.9)));
        assert_eq!(map.get("plugin_slot"), Some(&json!("alpha")));
    }

    #[test]
    fn parallel_tool_calls_defaults_on() {
        let map = args().to_map();
        assert_eq!(map.get("parallel_tool_calls_enabled"), Some(&json!(true)));
    }

    #[test]
    fn model_and_service_always_present() {
        let map = args().to_map();
        assert_eq!(map.get("ai_model_id"), Some(&json!("gpt-4")));
        assert_eq!(map.get("service_id"), Some(&json!("default")));
    }
}
