//! Integration tests for the `OpenAI` assistant adapter.
//!
//! These tests are ignored by default because they require:
//! - `OPENAI_API_KEY` environment variable (or in `.env` file)
//! - Network access to the `OpenAI` API
//! - May incur API costs
//!
//! To run these tests:
//! ```sh
//! cargo test -p arcturus_providers --test assistant_integration -- --ignored
//! ```

mod common;

use arcturus_agents::{AgentError, RemoteServiceError};
use arcturus_providers::openai::OpenAiAssistantAgent;
use common::api_key;

const MODEL: &str = "gpt-4o-mini";

#[tokio::test]
#[ignore = "requires OPENAI_API_KEY"]
async fn create_registers_a_remote_assistant() {
    let agent = OpenAiAssistantAgent::builder()
        .api_key(api_key())
        .ai_model_id(MODEL)
        .name("arcturus-integration-test")
        .instructions("Reply with a single word.")
        .create()
        .await
        .expect("create should register the assistant");

    let id = agent.assistant_id().expect("remote ID should be bound");
    assert!(id.starts_with("asst_"));
}

#[tokio::test]
#[ignore = "requires OPENAI_API_KEY"]
async fn list_definitions_yields_newest_first() {
    let agent = OpenAiAssistantAgent::builder()
        .api_key(api_key())
        .ai_model_id(MODEL)
        .build()
        .expect("build should succeed with a key and model");

    let definitions: Vec<_> = agent
        .list_definitions()
        .await
        .expect("listing should succeed")
        .collect();

    // Zero records is a valid outcome on a fresh account.
    for definition in definitions {
        assert!(!definition.ai_model_id.is_empty());
        assert!(definition.id.starts_with("asst_"));
    }
}

#[tokio::test]
#[ignore = "requires OPENAI_API_KEY"]
async fn retrieve_round_trips_a_created_assistant() {
    let created = OpenAiAssistantAgent::builder()
        .api_key(api_key())
        .ai_model_id(MODEL)
        .name("arcturus-retrieve-test")
        .enable_file_search(true)
        .create()
        .await
        .expect("create should register the assistant");

    let id = created.assistant_id().unwrap();
    let retrieved = OpenAiAssistantAgent::retrieve(id, &api_key(), None, None)
        .await
        .expect("retrieve should find the assistant");

    assert_eq!(retrieved.assistant_id(), Some(id));
    assert_eq!(retrieved.name(), Some("arcturus-retrieve-test"));
    assert_eq!(retrieved.init_args().enable_file_search, Some(true));
}

#[tokio::test]
#[ignore = "requires OPENAI_API_KEY"]
async fn retrieve_unknown_id_is_a_remote_error() {
    let result =
        OpenAiAssistantAgent::retrieve("asst_does_not_exist", &api_key(), None, None).await;

    assert!(matches!(
        result,
        Err(AgentError::Remote(RemoteServiceError::Service { .. }))
    ));
}

#[tokio::test]
#[ignore = "requires OPENAI_API_KEY"]
async fn bad_credential_is_an_auth_error() {
    let result = OpenAiAssistantAgent::retrieve("asst_anything", "sk-invalid", None, None).await;

    assert!(matches!(
        result,
        Err(AgentError::Remote(RemoteServiceError::Auth(_)))
    ));
}
