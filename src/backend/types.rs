//! Backend request/response types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest error body excerpt echoed back when the body is not structured.
const ERROR_EXCERPT_CHARS: usize = 100;

/// Errors that can occur when talking to the text-to-speech API.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed with status {status}")]
    RequestFailed { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Tuning parameters sent with every synthesis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: None,
            use_speaker_boost: None,
        }
    }
}

/// Body of a text-to-speech request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
}

impl SynthesizeRequest {
    /// Create a new synthesis request with default voice settings.
    pub fn new(text: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_id: model_id.into(),
            voice_settings: VoiceSettings::default(),
        }
    }

    /// Set the voice settings.
    pub fn with_settings(mut self, settings: VoiceSettings) -> Self {
        self.voice_settings = settings;
        self
    }
}

/// One voice from the provider's catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub voice_id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, serde_json::Value>,
}

impl VoiceInfo {
    /// Premade voices are the ones available on the free tier.
    pub fn is_premade(&self) -> bool {
        self.category.as_deref() == Some("premade")
    }

    pub fn use_case(&self) -> Option<&str> {
        self.labels.get("use_case").and_then(|v| v.as_str())
    }
}

/// Response from the voice catalog endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoicesResponse {
    #[serde(default)]
    pub voices: Vec<VoiceInfo>,
}

/// Turn an error response body into a short human-readable message.
///
/// The API reports failures as `{"detail": {"status": ..., "message": ...}}`
/// or `{"detail": "..."}`. Anything else falls back to a truncated copy of
/// the raw body.
pub fn describe_error_body(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("detail").cloned());

    let message = match &detail {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(d) => d
            .get("status")
            .or_else(|| d.get("message"))
            .and_then(|v| v.as_str())
            .map(str::to_string),
        None => None,
    };

    message.unwrap_or_else(|| body.chars().take(ERROR_EXCERPT_CHARS).collect())
}
