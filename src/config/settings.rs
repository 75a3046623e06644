//! Probe configuration: suite presets, TOML file, command-line overrides.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::{SynthesizeRequest, VoiceSettings};
use crate::cli::Suite;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Errors that can occur while resolving the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No API key configured. Pass --api-key, set ELEVENLABS_API_KEY or add api_key to the config file")]
    MissingApiKey,

    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Errors that can occur when parsing a voice entry.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VoiceEntryParseError {
    #[error("Invalid format: {0}. Expected 'Label=voice_id'")]
    InvalidFormat(String),

    #[error("Voice label cannot be empty")]
    EmptyLabel,

    #[error("Voice identifier cannot be empty")]
    EmptyId,
}

/// Provider API key. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// A voice to probe: display label plus the provider's opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceEntry {
    pub label: String,
    pub id: String,
}

impl VoiceEntry {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }

    /// Parse a voice entry from "Label=voice_id" format.
    ///
    /// # Examples
    /// ```
    /// use voice_probe::config::VoiceEntry;
    /// let entry = VoiceEntry::parse("Sarah=EXAVITQu4vr4xnSDxMaL").unwrap();
    /// assert_eq!(entry.label, "Sarah");
    /// ```
    pub fn parse(input: &str) -> Result<Self, VoiceEntryParseError> {
        let Some((label, id)) = input.split_once('=') else {
            return Err(VoiceEntryParseError::InvalidFormat(
                "Missing '=' separator".to_string(),
            ));
        };

        let label = label.trim();
        let id = id.trim();

        if label.is_empty() {
            return Err(VoiceEntryParseError::EmptyLabel);
        }
        if id.is_empty() {
            return Err(VoiceEntryParseError::EmptyId);
        }

        Ok(Self::new(label, id))
    }
}

/// On-disk configuration. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub api_key: Option<ApiKey>,
    pub base_url: Option<String>,
    pub model_id: Option<String>,
    pub text: Option<String>,
    pub voice_settings: Option<VoiceSettings>,
    pub voices: Option<Vec<VoiceEntry>>,
    pub list_catalog: Option<bool>,
    pub save_audio: Option<bool>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Returns the default config file path: `<config_dir>/voice-probe/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("voice-probe").join("config.toml"))
    }

    /// Load the explicit file if given, otherwise the default file if it exists.
    pub fn discover(explicit: Option<&Path>) -> Result<Option<Self>, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path).map(Some);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path).map(Some),
            _ => Ok(None),
        }
    }
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<ApiKey>,
    pub base_url: Option<String>,
    pub model_id: Option<String>,
    pub text: Option<String>,
    pub voices: Option<Vec<VoiceEntry>>,
    pub save_audio: Option<bool>,
    pub output_dir: Option<PathBuf>,
}

/// Fully resolved configuration handed to the runner.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub api_key: ApiKey,
    pub base_url: String,
    pub model_id: String,
    pub text: String,
    pub voice_settings: VoiceSettings,
    pub voices: Vec<VoiceEntry>,
    pub list_catalog: bool,
    pub save_audio: bool,
    pub output_dir: PathBuf,
}

impl ProbeConfig {
    /// Merge command-line overrides, the config file and the suite preset,
    /// in that order of precedence.
    pub fn resolve(
        suite: Suite,
        file: Option<ConfigFile>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let file = file.unwrap_or_default();

        let api_key = overrides
            .api_key
            .or(file.api_key)
            .filter(|key| !key.expose().trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            base_url: overrides
                .base_url
                .or(file.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model_id: overrides
                .model_id
                .or(file.model_id)
                .unwrap_or_else(|| suite.model_id().to_string()),
            text: overrides
                .text
                .or(file.text)
                .unwrap_or_else(|| suite.text().to_string()),
            voice_settings: file.voice_settings.unwrap_or_default(),
            voices: overrides
                .voices
                .or(file.voices)
                .unwrap_or_else(|| suite.voices()),
            list_catalog: file.list_catalog.unwrap_or(suite.lists_catalog()),
            save_audio: overrides
                .save_audio
                .or(file.save_audio)
                .unwrap_or(suite.saves_audio()),
            output_dir: overrides
                .output_dir
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
        })
    }

    /// The request body shared by every probe in a run.
    pub fn synthesis_request(&self) -> SynthesizeRequest {
        SynthesizeRequest::new(self.text.clone(), self.model_id.clone())
            .with_settings(self.voice_settings.clone())
    }
}
