//! Communication with the ElevenLabs text-to-speech API.
//!
//! Provides the [`Backend`] trait plus the blocking HTTP implementation used
//! by the probe runner.

mod client;
mod types;

pub use client::HttpBackend;
pub use types::{
    BackendError, SynthesizeRequest, VoiceInfo, VoiceSettings, VoicesResponse,
    describe_error_body,
};

use crate::config::ProbeConfig;

/// Trait for text-to-speech API communication.
///
/// This trait abstracts the HTTP communication with the provider,
/// allowing for mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Fetch the provider's voice catalog.
    fn list_voices(&self) -> Result<VoicesResponse, BackendError>;

    /// Synthesize speech for one voice.
    ///
    /// # Arguments
    /// * `voice_id` - Provider voice identifier, passed through unvalidated
    /// * `request` - Text, model and voice settings
    ///
    /// # Returns
    /// Raw audio bytes (MPEG)
    fn synthesize(&self, voice_id: &str, request: &SynthesizeRequest)
    -> Result<Vec<u8>, BackendError>;
}

/// Create a backend from the resolved configuration.
pub fn create_backend(config: &ProbeConfig) -> HttpBackend {
    HttpBackend::new(&config.base_url, config.api_key.expose())
}
