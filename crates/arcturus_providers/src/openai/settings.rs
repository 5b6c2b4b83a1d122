//! `OpenAI` connection settings resolution.

use arcturus_agents::ConfigurationError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable holding the API key.
pub(crate) const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable holding the organization ID.
pub(crate) const ORG_ID_VAR: &str = "OPENAI_ORG_ID";
/// Environment variable holding the chat model ID.
pub(crate) const CHAT_MODEL_ID_VAR: &str = "OPENAI_CHAT_MODEL_ID";

/// Caller-supplied settings inputs: explicit values plus an optional env
/// file location.
#[derive(Debug, Clone, Default)]
pub(crate) struct SettingsInput {
    pub api_key: Option<String>,
    pub org_id: Option<String>,
    pub chat_model_id: Option<String>,
    pub env_file_path: Option<PathBuf>,
    pub env_file_encoding: Option<String>,
}

/// Resolved `OpenAI` connection settings.
///
/// Each field resolves from the explicit value first, then the env file
/// (when a path was given), then the ambient process environment.
#[derive(Clone, Default)]
pub struct OpenAiSettings {
    /// The API key, if resolvable.
    pub api_key: Option<String>,
    /// The organization ID, if resolvable.
    pub org_id: Option<String>,
    /// The chat model ID, if resolvable.
    pub chat_model_id: Option<String>,
}

impl OpenAiSettings {
    pub(crate) fn resolve(input: SettingsInput) -> Result<Self, ConfigurationError> {
        let file_vars = match &input.env_file_path {
            Some(path) => load_env_file(path, input.env_file_encoding.as_deref())?,
            None => HashMap::new(),
        };

        // An empty value from any source is treated as unset so resolution
        // can fall through to the next source.
        let not_empty = |value: String| (!value.is_empty()).then_some(value);
        let pick = |explicit: Option<String>, var: &str| {
            explicit
                .and_then(not_empty)
                .or_else(|| file_vars.get(var).cloned().and_then(not_empty))
                .or_else(|| std::env::var(var).ok().and_then(not_empty))
        };

        let settings = Self {
            api_key: pick(input.api_key, API_KEY_VAR),
            org_id: pick(input.org_id, ORG_ID_VAR),
            chat_model_id: pick(input.chat_model_id, CHAT_MODEL_ID_VAR),
        };

        tracing::debug!(
            has_api_key = settings.api_key.is_some(),
            has_org_id = settings.org_id.is_some(),
            chat_model_id = settings.chat_model_id.as_deref().unwrap_or(""),
            "resolved OpenAI settings"
        );

        Ok(settings)
    }
}

impl core::fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("org_id", &self.org_id)
            .field("chat_model_id", &self.chat_model_id)
            .finish()
    }
}

/// Reads a dotenv-style file without mutating the process environment.
///
/// Only UTF-8 encodings are supported; an explicitly named file that cannot
/// be read is a settings failure, not a silent fallback.
fn load_env_file(
    path: &Path,
    encoding: Option<&str>,
) -> Result<HashMap<String, String>, ConfigurationError> {
    if let Some(encoding) = encoding {
        let normalized = encoding.to_ascii_lowercase().replace('_', "-");
        if normalized != "utf-8" && normalized != "utf8" {
            return Err(ConfigurationError::Settings(format!(
                "unsupported env file encoding: {encoding}"
            )));
        }
    }

    let iter = dotenvy::from_path_iter(path).map_err(|err| {
        ConfigurationError::Settings(format!("cannot read env file {}: {err}", path.display()))
    })?;

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|err| {
            ConfigurationError::Settings(format!(
                "malformed env file {}: {err}",
                path.display()
            ))
        })?;
        vars.insert(key, value);
    }
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn explicit_values_win_over_env_file() {
        let file = env_file("OPENAI_API_KEY=from-file\nOPENAI_CHAT_MODEL_ID=gpt-file\n");
        let settings = OpenAiSettings::resolve(SettingsInput {
            api_key: Some("explicit".into()),
            env_file_path: Some(file.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(settings.api_key.as_deref(), Some("explicit"));
        assert_eq!(settings.chat_model_id.as_deref(), Some("gpt-file"));
    }

    #[test]
    fn env_file_fills_missing_fields() {
        let file = env_file("OPENAI_ORG_ID=org-42\n");
        let settings = OpenAiSettings::resolve(SettingsInput {
            env_file_path: Some(file.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(settings.org_id.as_deref(), Some("org-42"));
    }

    #[test]
    fn missing_env_file_is_a_settings_error() {
        let result = OpenAiSettings::resolve(SettingsInput {
            env_file_path: Some(PathBuf::from("/nonexistent/.env")),
            ..Default::default()
        });
        assert!(matches!(result, Err(ConfigurationError::Settings(_))));
    }

    #[test]
    fn unsupported_encoding_is_rejected() {
        let file = env_file("OPENAI_API_KEY=k\n");
        let result = OpenAiSettings::resolve(SettingsInput {
            env_file_path: Some(file.path().to_path_buf()),
            env_file_encoding: Some("latin-1".into()),
            ..Default::default()
        });
        assert!(matches!(result, Err(ConfigurationError::Settings(_))));
    }

    #[test]
    fn utf8_encoding_spellings_are_accepted() {
        let file = env_file("OPENAI_API_KEY=k\n");
        let settings = OpenAiSettings::resolve(SettingsInput {
            env_file_path: Some(file.path().to_path_buf()),
            env_file_encoding: Some("UTF_8".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn empty_explicit_value_does_not_count_as_set() {
        let file = env_file("OPENAI_CHAT_MODEL_ID=gpt-file\n");
        let settings = OpenAiSettings::resolve(SettingsInput {
            chat_model_id: Some(String::new()),
            env_file_path: Some(file.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(settings.chat_model_id.as_deref(), Some("gpt-file"));
    }

    #[test]
    fn debug_redacts_the_api_key() {
        let settings = OpenAiSettings {
            api_key: Some("sk-secret".into()),
            ..Default::default()
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
