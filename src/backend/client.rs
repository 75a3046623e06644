//! HTTP client for the ElevenLabs API.

use reqwest::header::ACCEPT;
use tracing::debug;

use super::Backend;
use super::types::{BackendError, SynthesizeRequest, VoicesResponse};

const API_KEY_HEADER: &str = "xi-api-key";

/// HTTP-based backend client.
pub struct HttpBackend {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    /// Create a new HTTP backend client.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Get the base URL for this backend.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn voices_url(&self) -> String {
        format!("{}/v1/voices", self.base_url)
    }

    pub fn synthesis_url(&self, voice_id: &str) -> String {
        format!("{}/v1/text-to-speech/{voice_id}", self.base_url)
    }

    /// Fail with the raw body when the status is not a success.
    fn check_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        Err(BackendError::RequestFailed {
            status: status.as_u16(),
            body,
        })
    }
}

impl Backend for HttpBackend {
    fn list_voices(&self) -> Result<VoicesResponse, BackendError> {
        let url = self.voices_url();
        debug!(%url, "fetching voice catalog");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        Self::check_status(response)?
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    fn synthesize(
        &self,
        voice_id: &str,
        request: &SynthesizeRequest,
    ) -> Result<Vec<u8>, BackendError> {
        let url = self.synthesis_url(voice_id);
        debug!(%url, model_id = %request.model_id, "requesting synthesis");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "audio/mpeg")
            .json(request)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        Self::check_status(response)?
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
