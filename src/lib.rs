//! voice-probe: ElevenLabs voice and model diagnostics.
//!
//! This crate lists the voices an API key can see and checks, one request
//! per voice, which of them can synthesize speech with a given model.

pub mod backend;
pub mod cli;
pub mod config;
pub mod output;
pub mod probe;
