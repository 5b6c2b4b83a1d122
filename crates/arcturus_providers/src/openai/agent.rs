//! `OpenAI` assistant agent and its configuration builder.

use super::client::AssistantsClient;
use super::definition::AssistantDefinition;
use super::settings::{OpenAiSettings, SettingsInput};
use super::types::{
    AssistantResponseFormat, AssistantTool, CodeInterpreterResources, CreateAssistantRequest,
    FileSearchResources, ListAssistantsQuery, ResponseFormatKind, ResponseFormatSpec,
    ToolResources,
};
use crate::telemetry;
use arcturus_agents::{
    AgentBase, AgentError, AgentInitArgs, ConfigurationError, DEFAULT_SERVICE_ID,
    RemoteServiceError,
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::PathBuf;

/// An agent backed by a remotely hosted `OpenAI` assistant.
///
/// Built from caller options via [`builder()`](Self::builder), from a remote
/// record via [`retrieve`](Self::retrieve), or listed in bulk via
/// [`list_definitions`](Self::list_definitions). The configuration is
/// immutable after construction and exactly one transport client stays bound
/// for the agent's lifetime.
pub struct OpenAiAssistantAgent {
    args: AgentInitArgs<AssistantsClient>,
    assistant_id: Option<String>,
}

impl AgentBase<AssistantsClient> for OpenAiAssistantAgent {
    fn from_init_args(args: AgentInitArgs<AssistantsClient>) -> Self {
        Self {
            assistant_id: args.id.clone(),
            args,
        }
    }
}

impl OpenAiAssistantAgent {
    /// Starts a configuration builder.
    #[must_use]
    pub fn builder() -> OpenAiAssistantAgentBuilder {
        OpenAiAssistantAgentBuilder::default()
    }

    /// The normalized option set this agent was initialized with.
    #[must_use]
    pub fn init_args(&self) -> &AgentInitArgs<AssistantsClient> {
        &self.args
    }

    /// The bound transport client.
    #[must_use]
    pub fn client(&self) -> &AssistantsClient {
        &self.args.client
    }

    /// The model the agent runs on.
    #[must_use]
    pub fn ai_model_id(&self) -> &str {
        &self.args.ai_model_id
    }

    /// The service the agent is registered under.
    #[must_use]
    pub fn service_id(&self) -> &str {
        &self.args.service_id
    }

    /// The agent's name, when one was configured.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.args.name.as_deref()
    }

    /// The remote assistant ID, once known (configured by the caller,
    /// retrieved, or bound by [`create`](OpenAiAssistantAgentBuilder::create)).
    #[must_use]
    pub fn assistant_id(&self) -> Option<&str> {
        self.assistant_id.as_deref()
    }

    /// Creates a transport client from a credential, an optional
    /// organization ID, and optional extra headers.
    ///
    /// Caller headers are merged with process-wide app-identity headers; the
    /// product token is prepended to any user agent value rather than
    /// replacing it, and explicitly passed headers are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingApiKey`] when no credential is
    /// available, or [`ConfigurationError::InvalidHeader`] when a header
    /// cannot be encoded.
    pub fn create_client(
        api_key: Option<&str>,
        org_id: Option<&str>,
        default_headers: Option<&HashMap<String, String>>,
    ) -> Result<AssistantsClient, ConfigurationError> {
        let merged =
            telemetry::merge_default_headers(default_headers, telemetry::app_info().as_ref());
        let api_key = api_key.ok_or(ConfigurationError::MissingApiKey)?;
        AssistantsClient::new(api_key, org_id, &merged)
    }

    /// Lists the remote assistant definitions, newest first.
    ///
    /// One page is fetched in a single call; the returned iterator maps the
    /// records lazily and makes no further network calls. An empty remote
    /// set yields an empty iterator.
    pub async fn list_definitions(
        &self,
    ) -> Result<impl Iterator<Item = AssistantDefinition>, RemoteServiceError> {
        let page = self
            .args
            .client
            .list_assistants(&ListAssistantsQuery::default())
            .await?;
        Ok(page.data.into_iter().map(AssistantDefinition::from))
    }

    /// Retrieves an assistant by ID and constructs an agent from it.
    ///
    /// A short-lived client scoped to the given credential is used for the
    /// fetch and then bound to the new agent; any client bound to an
    /// existing agent is not involved.
    ///
    /// # Errors
    ///
    /// Fails with a [`RemoteServiceError`] when the ID does not exist
    /// remotely or the call is unauthorized.
    pub async fn retrieve(
        id: &str,
        api_key: &str,
        org_id: Option<&str>,
        default_headers: Option<&HashMap<String, String>>,
    ) -> Result<Self, AgentError> {
        let client = Self::create_client(Some(api_key), org_id, default_headers)?;
        let assistant = client.retrieve_assistant(id).await?;
        let definition = AssistantDefinition::from(assistant);
        Ok(Self::builder()
            .client(client)
            .apply_definition(definition)
            .build()?)
    }

    /// The create-request this agent's configuration marshals to.
    fn create_request(&self) -> CreateAssistantRequest {
        let args = &self.args;

        let mut tools = Vec::new();
        if args.enable_code_interpreter == Some(true) {
            tools.push(AssistantTool::CodeInterpreter);
        }
        if args.enable_file_search == Some(true) {
            tools.push(AssistantTool::FileSearch);
        }

        let code_interpreter = (!args.file_ids.is_empty()).then(|| CodeInterpreterResources {
            file_ids: args.file_ids.clone(),
        });
        let file_search = args.vector_store_id.clone().map(|id| FileSearchResources {
            vector_store_ids: vec![id],
        });
        let tool_resources = (code_interpreter.is_some() || file_search.is_some()).then(|| {
            ToolResources {
                code_interpreter,
                file_search,
            }
        });

        let response_format = (args.enable_json_response == Some(true)).then(|| {
            AssistantResponseFormat::Format(ResponseFormatSpec {
                kind: ResponseFormatKind::JsonObject,
            })
        });

        CreateAssistantRequest {
            model: args.ai_model_id.clone(),
            name: args.name.clone(),
            description: args.description.clone(),
            instructions: args.instructions.clone(),
            tools,
            tool_resources,
            metadata: (!args.metadata.is_empty()).then(|| args.metadata.clone()),
            temperature: args.temperature,
            top_p: args.top_p,
            response_format,
        }
    }
}

impl core::fmt::Debug for OpenAiAssistantAgent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OpenAiAssistantAgent")
            .field("ai_model_id", &self.args.ai_model_id)
            .field("service_id", &self.args.service_id)
            .field("name", &self.args.name)
            .field("assistant_id", &self.assistant_id)
            .finish()
    }
}

/// Builder for [`OpenAiAssistantAgent`].
///
/// All options are optional; validation happens in [`build`](Self::build) /
/// [`create`](Self::create). A credential (or a ready-made client) and a
/// resolvable model ID are the only hard requirements.
#[derive(Debug, Default)]
pub struct OpenAiAssistantAgentBuilder {
    service_id: Option<String>,
    ai_model_id: Option<String>,
    api_key: Option<String>,
    org_id: Option<String>,
    client: Option<AssistantsClient>,
    default_headers: Option<HashMap<String, String>>,
    env_file_path: Option<PathBuf>,
    env_file_encoding: Option<String>,
    description: Option<String>,
    id: Option<String>,
    instructions: Option<String>,
    name: Option<String>,
    enable_code_interpreter: Option<bool>,
    enable_file_search: Option<bool>,
    enable_json_response: Option<bool>,
    file_ids: Vec<String>,
    temperature: Option<f32>,
    top_p: Option<f32>,
    vector_store_id: Option<String>,
    metadata: Map<String, Value>,
    max_completion_tokens: Option<u32>,
    max_prompt_tokens: Option<u32>,
    parallel_tool_calls_enabled: Option<bool>,
    truncation_message_count: Option<u32>,
    extra: Map<String, Value>,
}

impl OpenAiAssistantAgentBuilder {
    /// The service the agent is registered under. Defaults to
    /// [`DEFAULT_SERVICE_ID`].
    #[must_use]
    pub fn service_id(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = Some(service_id.into());
        self
    }

    /// The model the agent runs on.
    #[must_use]
    pub fn ai_model_id(mut self, ai_model_id: impl Into<String>) -> Self {
        self.ai_model_id = Some(ai_model_id.into());
        self
    }

    /// The API key used when no client is supplied.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The organization the credential is scoped to.
    #[must_use]
    pub fn org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = Some(org_id.into());
        self
    }

    /// A ready-made transport client. When set, the builder creates none.
    #[must_use]
    pub fn client(mut self, client: AssistantsClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Extra headers for a builder-created client.
    #[must_use]
    pub fn default_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Path to an env file consulted during settings resolution.
    #[must_use]
    pub fn env_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file_path = Some(path.into());
        self
    }

    /// Encoding of the env file (UTF-8 only).
    #[must_use]
    pub fn env_file_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.env_file_encoding = Some(encoding.into());
        self
    }

    /// Assistant description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Known remote assistant ID.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// System instructions.
    #[must_use]
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Assistant name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Enable the code interpreter tool.
    #[must_use]
    pub fn enable_code_interpreter(mut self, enabled: bool) -> Self {
        self.enable_code_interpreter = Some(enabled);
        self
    }

    /// Enable the file search tool.
    #[must_use]
    pub fn enable_file_search(mut self, enabled: bool) -> Self {
        self.enable_file_search = Some(enabled);
        self
    }

    /// Constrain responses to valid JSON.
    #[must_use]
    pub fn enable_json_response(mut self, enabled: bool) -> Self {
        self.enable_json_response = Some(enabled);
        self
    }

    /// Files available to the code interpreter tool.
    #[must_use]
    pub fn file_ids(mut self, file_ids: Vec<String>) -> Self {
        self.file_ids = file_ids;
        self
    }

    /// Sampling temperature.
    #[must_use]
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Nucleus sampling parameter.
    #[must_use]
    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Vector store backing the file search tool.
    #[must_use]
    pub fn vector_store_id(mut self, vector_store_id: impl Into<String>) -> Self {
        self.vector_store_id = Some(vector_store_id.into());
        self
    }

    /// Free-form assistant metadata.
    #[must_use]
    pub fn metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Completion token limit.
    #[must_use]
    pub fn max_completion_tokens(mut self, limit: u32) -> Self {
        self.max_completion_tokens = Some(limit);
        self
    }

    /// Prompt token limit.
    #[must_use]
    pub fn max_prompt_tokens(mut self, limit: u32) -> Self {
        self.max_prompt_tokens = Some(limit);
        self
    }

    /// Whether the model may issue tool calls in parallel (default true).
    #[must_use]
    pub fn parallel_tool_calls_enabled(mut self, enabled: bool) -> Self {
        self.parallel_tool_calls_enabled = Some(enabled);
        self
    }

    /// Number of recent messages kept when truncating a thread.
    #[must_use]
    pub fn truncation_message_count(mut self, count: u32) -> Self {
        self.truncation_message_count = Some(count);
        self
    }

    /// Adds a caller extension field; forwarded last, overriding the named
    /// fields on key collision.
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Copies a remote definition's fields into the builder.
    pub(crate) fn apply_definition(mut self, definition: AssistantDefinition) -> Self {
        self.ai_model_id = Some(definition.ai_model_id);
        self.id = Some(definition.id);
        self.name = definition.name;
        self.description = definition.description;
        self.instructions = definition.instructions;
        self.enable_code_interpreter = Some(definition.enable_code_interpreter);
        self.enable_file_search = Some(definition.enable_file_search);
        self.enable_json_response = Some(definition.enable_json_response);
        self.file_ids = definition.file_ids;
        self.temperature = definition.temperature;
        self.top_p = definition.top_p;
        self.vector_store_id = definition.vector_store_id;
        self.metadata = definition.metadata;
        self
    }

    /// Validates the configuration and constructs the agent.
    ///
    /// No network call is made. Settings resolve from explicit options, the
    /// env file (when given), then the process environment; a client is
    /// created only when the caller did not supply one.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::Settings`] when settings loading fails.
    /// - [`ConfigurationError::MissingApiKey`] when neither a client nor a
    ///   credential is available.
    /// - [`ConfigurationError::MissingModelId`] when no model ID resolves.
    pub fn build(self) -> Result<OpenAiAssistantAgent, ConfigurationError> {
        let settings = OpenAiSettings::resolve(SettingsInput {
            api_key: self.api_key,
            org_id: self.org_id,
            chat_model_id: self.ai_model_id,
            env_file_path: self.env_file_path,
            env_file_encoding: self.env_file_encoding,
        })?;

        if self.client.is_none() && settings.api_key.is_none() {
            return Err(ConfigurationError::MissingApiKey);
        }
        let ai_model_id = settings
            .chat_model_id
            .ok_or(ConfigurationError::MissingModelId)?;

        let client = match self.client {
            Some(client) => client,
            None => OpenAiAssistantAgent::create_client(
                settings.api_key.as_deref(),
                settings.org_id.as_deref(),
                self.default_headers.as_ref(),
            )?,
        };

        let service_id = self
            .service_id
            .unwrap_or_else(|| DEFAULT_SERVICE_ID.to_string());

        let mut args = AgentInitArgs::new(ai_model_id, service_id, client);
        args.description = self.description;
        args.instructions = self.instructions;
        args.enable_code_interpreter = self.enable_code_interpreter;
        args.enable_file_search = self.enable_file_search;
        args.enable_json_response = self.enable_json_response;
        args.file_ids = self.file_ids;
        args.temperature = self.temperature;
        args.top_p = self.top_p;
        args.vector_store_id = self.vector_store_id;
        args.metadata = self.metadata;
        args.max_completion_tokens = self.max_completion_tokens;
        args.max_prompt_tokens = self.max_prompt_tokens;
        args.parallel_tool_calls_enabled = self.parallel_tool_calls_enabled.unwrap_or(true);
        args.truncation_message_count = self.truncation_message_count;
        args.name = self.name;
        args.id = self.id;
        args.extra = self.extra;

        Ok(OpenAiAssistantAgent::from_init_args(args))
    }

    /// Builds the agent and registers its assistant definition remotely.
    ///
    /// Validation is identical to [`build`](Self::build); on success exactly
    /// one create call is made and the returned assistant ID is bound to the
    /// agent. Remote failures surface as [`RemoteServiceError`]s and are not
    /// retried here.
    pub async fn create(self) -> Result<OpenAiAssistantAgent, AgentError> {
        let mut agent = self.build()?;
        let assistant = agent.client().create_assistant(&agent.create_request()).await?;
        agent.assistant_id = Some(assistant.id);
        Ok(agent)
    }
}
