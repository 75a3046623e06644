//! Runtime configuration.
//!
//! The API key, voice list and request parameters are resolved once at
//! startup from the selected suite, an optional TOML file and the command
//! line, then passed explicitly to the backend and runner.

mod settings;

pub use settings::{
    ApiKey, ConfigError, ConfigFile, ConfigOverrides, DEFAULT_BASE_URL, ProbeConfig, VoiceEntry,
    VoiceEntryParseError,
};
