//! Probe runner implementation.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::backend::{Backend, BackendError, SynthesizeRequest, VoiceInfo, describe_error_body};
use crate::config::{ProbeConfig, VoiceEntry};
use crate::output::AudioStore;

/// How a single probe ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// Audio came back; `saved_to` is set when samples are persisted.
    Success {
        audio_bytes: usize,
        saved_to: Option<PathBuf>,
    },
    /// The API answered with a non-success status.
    HttpError { status: u16, message: String },
    /// The request never produced a readable response.
    TransportError { message: String },
    /// Audio came back but could not be written.
    SaveFailed { audio_bytes: usize, message: String },
}

impl ProbeOutcome {
    /// Whether the voice produced audio.
    pub fn works(&self) -> bool {
        matches!(
            self,
            ProbeOutcome::Success { .. } | ProbeOutcome::SaveFailed { .. }
        )
    }
}

impl From<BackendError> for ProbeOutcome {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::RequestFailed { status, body } => ProbeOutcome::HttpError {
                status,
                message: describe_error_body(&body),
            },
            other => ProbeOutcome::TransportError {
                message: other.to_string(),
            },
        }
    }
}

/// Result of probing one voice.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub voice: VoiceEntry,
    pub outcome: ProbeOutcome,
}

/// Results of a full run, in probe order.
#[derive(Debug, Clone, Default)]
pub struct ProbeReport {
    pub results: Vec<ProbeResult>,
}

impl ProbeReport {
    pub fn working(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.works()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.working()
    }

    /// Voices that produced audio, in probe order.
    pub fn working_voices(&self) -> impl Iterator<Item = &VoiceEntry> {
        self.results
            .iter()
            .filter(|r| r.outcome.works())
            .map(|r| &r.voice)
    }
}

/// Progress notifications emitted while a run is in flight.
#[derive(Debug)]
pub enum ProbeEvent<'a> {
    Started(&'a VoiceEntry),
    Finished(&'a ProbeResult),
}

/// Issues one synthesis request per configured voice.
pub struct ProbeRunner<B: Backend> {
    backend: B,
    request: SynthesizeRequest,
    store: Option<AudioStore>,
}

impl<B: Backend> ProbeRunner<B> {
    /// Create a runner that sends `request` for every voice and saves nothing.
    pub fn new(backend: B, request: SynthesizeRequest) -> Self {
        Self {
            backend,
            request,
            store: None,
        }
    }

    /// Create a runner from a resolved configuration.
    pub fn from_config(backend: B, config: &ProbeConfig) -> Self {
        let runner = Self::new(backend, config.synthesis_request());
        if config.save_audio {
            runner.with_store(AudioStore::with_dir(config.output_dir.clone()))
        } else {
            runner
        }
    }

    /// Persist every successful sample into `store`.
    pub fn with_store(mut self, store: AudioStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn request(&self) -> &SynthesizeRequest {
        &self.request
    }

    /// Fetch the provider's voice catalog.
    pub fn list_voices(&self) -> Result<Vec<VoiceInfo>, BackendError> {
        let response = self.backend.list_voices()?;
        info!(count = response.voices.len(), "fetched voice catalog");
        Ok(response.voices)
    }

    /// Probe a single voice. Failures are captured in the outcome.
    pub fn probe_voice(&self, voice: &VoiceEntry) -> ProbeResult {
        info!(label = %voice.label, voice_id = %voice.id, "probing voice");

        let outcome = match self.backend.synthesize(&voice.id, &self.request) {
            Ok(audio) => self.handle_audio(voice, &audio),
            Err(err) => {
                warn!(label = %voice.label, error = %err, "probe failed");
                ProbeOutcome::from(err)
            }
        };

        ProbeResult {
            voice: voice.clone(),
            outcome,
        }
    }

    fn handle_audio(&self, voice: &VoiceEntry, audio: &[u8]) -> ProbeOutcome {
        let audio_bytes = audio.len();

        let Some(store) = &self.store else {
            return ProbeOutcome::Success {
                audio_bytes,
                saved_to: None,
            };
        };

        match store.save(&voice.label, audio) {
            Ok(path) => ProbeOutcome::Success {
                audio_bytes,
                saved_to: Some(path),
            },
            Err(err) => {
                warn!(label = %voice.label, error = %err, "could not save sample");
                ProbeOutcome::SaveFailed {
                    audio_bytes,
                    message: err.to_string(),
                }
            }
        }
    }

    /// Probe every voice in order, one request each.
    pub fn run<F>(&self, voices: &[VoiceEntry], mut observer: F) -> ProbeReport
    where
        F: FnMut(ProbeEvent<'_>),
    {
        let mut report = ProbeReport::default();

        for voice in voices {
            observer(ProbeEvent::Started(voice));
            let result = self.probe_voice(voice);
            observer(ProbeEvent::Finished(&result));
            report.results.push(result);
        }

        info!(
            working = report.working(),
            failed = report.failed(),
            "probe run complete"
        );
        report
    }
}
