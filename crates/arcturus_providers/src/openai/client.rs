//! `OpenAI` Assistants API client.

use super::types::{
    Assistant, AssistantList, CreateAssistantRequest, ErrorEnvelope, ListAssistantsQuery,
};
use arcturus_agents::{ConfigurationError, RemoteServiceError};
use core::time::Duration;
use reqwest::StatusCode;
use reqwest::header::{
    AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, RETRY_AFTER,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const ORGANIZATION_HEADER: &str = "OpenAI-Organization";
const BETA_HEADER: &str = "OpenAI-Beta";
const BETA_VERSION: &str = "assistants=v2";

/// HTTP client for the `OpenAI` Assistants API.
///
/// Cheap to clone; clones share the underlying connection pool. Either the
/// caller hands one to an agent builder (shared ownership) or the builder
/// creates one that the agent owns exclusively.
#[derive(Clone)]
pub struct AssistantsClient {
    http: reqwest::Client,
    headers: HeaderMap,
    organization: Option<String>,
    base_url: String,
}

impl AssistantsClient {
    /// Creates a new client bound to a credential, an optional organization,
    /// and a set of default headers sent with every request.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] when a header name or value cannot
    /// be encoded.
    pub fn new(
        api_key: &str,
        organization: Option<&str>,
        default_headers: &HashMap<String, String>,
    ) -> Result<Self, ConfigurationError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(BETA_HEADER, HeaderValue::from_static(BETA_VERSION));

        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|err| {
            ConfigurationError::InvalidHeader {
                name: AUTHORIZATION.to_string(),
                message: err.to_string(),
            }
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        if let Some(org) = organization {
            headers.insert(
                ORGANIZATION_HEADER,
                HeaderValue::from_str(org).map_err(|err| ConfigurationError::InvalidHeader {
                    name: ORGANIZATION_HEADER.to_string(),
                    message: err.to_string(),
                })?,
            );
        }

        // Caller defaults land last so they win over the standard headers.
        for (name, value) in default_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
                ConfigurationError::InvalidHeader {
                    name: name.clone(),
                    message: err.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|err| ConfigurationError::InvalidHeader {
                    name: name.clone(),
                    message: err.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            headers,
            organization: organization.map(str::to_string),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL, e.g. for a proxy.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Registers an assistant definition with the service.
    pub async fn create_assistant(
        &self,
        request: &CreateAssistantRequest,
    ) -> Result<Assistant, RemoteServiceError> {
        let url = format!("{}/assistants", self.base_url);
        tracing::debug!(model = %request.model, "creating assistant");

        let response = self
            .http
            .post(&url)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| RemoteServiceError::Http(err.to_string()))?;

        read_json(response).await
    }

    /// Fetches one assistant record by ID.
    pub async fn retrieve_assistant(&self, id: &str) -> Result<Assistant, RemoteServiceError> {
        let url = format!("{}/assistants/{id}", self.base_url);
        tracing::debug!(assistant_id = %id, "retrieving assistant");

        let response = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|err| RemoteServiceError::Http(err.to_string()))?;

        read_json(response).await
    }

    /// Fetches one page of assistant records.
    pub async fn list_assistants(
        &self,
        query: &ListAssistantsQuery,
    ) -> Result<AssistantList, RemoteServiceError> {
        let url = format!("{}/assistants", self.base_url);
        tracing::debug!(order = ?query.order, "listing assistants");

        let response = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .query(query)
            .send()
            .await
            .map_err(|err| RemoteServiceError::Http(err.to_string()))?;

        read_json(response).await
    }
}

impl core::fmt::Debug for AssistantsClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AssistantsClient")
            .field("base_url", &self.base_url)
            .field("organization", &self.organization)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RemoteServiceError> {
    let status = response.status();
    let retry_after = parse_retry_after(response.headers());

    let body = response
        .text()
        .await
        .map_err(|err| RemoteServiceError::Http(err.to_string()))?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "assistants request failed");
        return Err(service_error(status, retry_after, body));
    }

    serde_json::from_str(&body).map_err(RemoteServiceError::Json)
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Maps a non-success response to the error taxonomy. The service's own
/// error message is surfaced when the body carries one.
fn service_error(status: StatusCode, retry_after: Option<Duration>, body: String) -> RemoteServiceError {
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .unwrap_or(body);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RemoteServiceError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => RemoteServiceError::RateLimited { retry_after },
        _ => RemoteServiceError::Service {
            status: Some(status.as_u16()),
            message,
            source: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_default_headers_are_sent_verbatim() {
        let defaults = HashMap::from([("X-Request-Source".to_string(), "unit-test".to_string())]);
        let client = AssistantsClient::new("sk-test", Some("org-42"), &defaults).unwrap();

        assert_eq!(
            client.headers.get("X-Request-Source").unwrap(),
            "unit-test"
        );
        assert_eq!(client.headers.get(ORGANIZATION_HEADER).unwrap(), "org-42");
        assert_eq!(client.headers.get(BETA_HEADER).unwrap(), BETA_VERSION);
    }

    #[test]
    fn invalid_header_value_is_a_configuration_error() {
        let defaults = HashMap::from([("X-Bad".to_string(), "line\nbreak".to_string())]);
        let result = AssistantsClient::new("sk-test", None, &defaults);
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn debug_redacts_the_credential() {
        let client = AssistantsClient::new("sk-secret", None, &HashMap::new()).unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("sk-secret"));
    }

    #[test]
    fn unauthorized_maps_to_auth_error() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "code": "invalid_api_key"}}"#;
        let err = service_error(StatusCode::UNAUTHORIZED, None, body.to_string());
        assert!(matches!(err, RemoteServiceError::Auth(message) if message.contains("Incorrect API key")));
    }

    #[test]
    fn rate_limit_carries_retry_after() {
        let err = service_error(
            StatusCode::TOO_MANY_REQUESTS,
            Some(Duration::from_secs(7)),
            String::new(),
        );
        assert!(matches!(
            err,
            RemoteServiceError::RateLimited {
                retry_after: Some(d)
            } if d == Duration::from_secs(7)
        ));
    }

    #[test]
    fn unparseable_error_body_is_surfaced_raw() {
        let err = service_error(StatusCode::BAD_GATEWAY, None, "upstream fell over".to_string());
        assert!(matches!(
            err,
            RemoteServiceError::Service { status: Some(502), message, .. } if message == "upstream fell over"
        ));
    }
}
