use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{config, defaults, endpoints, models};
use crate::host::CredentialSource;
use crate::llm::GeminiClient;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub chat: ChatSettings,
    pub panel: PanelSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    /// Inline credential. Takes precedence over `api_key_env` when non-empty.
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    pub theme: String,
    pub title: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: config::API_KEY_ENV.to_string(),
            model: models::DEFAULT_GEMINI_MODEL.to_string(),
            base_url: endpoints::GEMINI_BASE_URL.to_string(),
        }
    }
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            theme: defaults::THEME.to_string(),
            title: defaults::PANEL_TITLE.to_string(),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(config::APP_DIR)
            .join(config::FILE_NAME)
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Reads settings from `path`, falling back to defaults when the file is
    /// missing or unparseable.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Ignoring unparseable settings at {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Resolve the credential: inline key first, then the configured env var.
    /// Empty values count as absent.
    pub fn api_key(&self) -> Option<String> {
        if let Some(key) = self.chat.api_key.as_deref() {
            if !key.trim().is_empty() {
                return Some(key.to_string());
            }
        }
        if self.chat.api_key_env.is_empty() {
            return None;
        }
        std::env::var(&self.chat.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Build the completion client for the configured endpoint and model.
    pub fn build_client(&self) -> GeminiClient {
        GeminiClient::new()
            .with_base_url(self.chat.base_url.clone())
            .with_model(self.chat.model.clone())
    }
}

/// Credential lookup backed by the settings file, re-read on every call.
///
/// The read is a blocking `std::fs` call made on the request task, once per
/// submission.
#[derive(Debug, Clone)]
pub struct SettingsCredentials {
    path: PathBuf,
}

impl SettingsCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for SettingsCredentials {
    fn default() -> Self {
        Self::new(Settings::config_path())
    }
}

impl CredentialSource for SettingsCredentials {
    fn api_key(&self) -> Option<String> {
        Settings::load_from(&self.path).api_key()
    }
}
