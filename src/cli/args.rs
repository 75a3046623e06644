//! CLI argument definitions and the built-in probe suites.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{ApiKey, ConfigOverrides, VoiceEntry};

/// Probe ElevenLabs voices and text-to-speech models.
#[derive(Parser, Debug)]
#[command(name = "voice-probe")]
#[command(about = "Check which ElevenLabs voices work with an API key and model")]
#[command(version)]
pub struct Args {
    /// Probe suite: "classic" (monolingual v1) or "turbo" (turbo v2.5, saves samples)
    #[arg(long, value_enum, default_value = "turbo")]
    pub suite: Suite,

    /// Only print the provider's voice catalog
    #[arg(long)]
    pub list_voices: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// ElevenLabs API key
    #[arg(long, env = "ELEVENLABS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Synthesis model identifier (overrides the suite's model)
    #[arg(short, long)]
    pub model_id: Option<String>,

    /// Text to synthesize (overrides the suite's text)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Voice to probe as "Label=voice_id"; repeat to build a custom list
    #[arg(long = "voice", value_parser = VoiceEntry::parse)]
    pub voices: Vec<VoiceEntry>,

    /// Save each successful sample as test_<label>.mp3
    #[arg(long, conflicts_with = "no_save")]
    pub save: bool,

    /// Never save samples
    #[arg(long)]
    pub no_save: bool,

    /// Directory for saved samples
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Collect the values given on the command line that override the
    /// config file and suite preset.
    pub fn overrides(&self) -> ConfigOverrides {
        let save_audio = match (self.save, self.no_save) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        ConfigOverrides {
            api_key: self.api_key.clone().map(ApiKey::new),
            base_url: self.base_url.clone(),
            model_id: self.model_id.clone(),
            text: self.text.clone(),
            voices: (!self.voices.is_empty()).then(|| self.voices.clone()),
            save_audio,
            output_dir: self.output_dir.clone(),
        }
    }
}

/// Built-in probe suite.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Suite {
    /// Legacy premade voices against the monolingual v1 model
    #[value(name = "classic")]
    Classic,

    /// Current free-tier voices against turbo v2.5, samples saved
    #[default]
    #[value(name = "turbo")]
    Turbo,
}

const CLASSIC_VOICES: &[(&str, &str)] = &[
    ("Rachel", "21m00Tcm4TlvDq8ikWAM"),
    ("Adam", "pNInz6obpgDQGcFmaJgB"),
    ("Bella", "EXAVITQu4vr4xnSDxMaL"),
    ("Antoni", "ErXwobaYiN019PkySvjV"),
    ("Elli", "MF3mGyEYCl7XYWbV9V6O"),
    ("Josh", "TxGEqnHWrfWFTfGW9XjX"),
    ("Arnold", "VR6AewLTigWG4xSOukaG"),
    ("Domi", "AZnzlk1XvdvUeBnXmlld"),
    ("Sam", "yoZ06aMxZJJ28mfd3POQ"),
];

const TURBO_VOICES: &[(&str, &str)] = &[
    ("Sarah", "EXAVITQu4vr4xnSDxMaL"),
    ("Laura", "FGY2WhTYpPnrIDTdsKH5"),
    ("Alice", "Xb7hH8MSUJpSbSDYk0k2"),
    ("Matilda", "XrExE9yKIg1WjnnlVkGX"),
    ("Jessica", "cgSgspJ2msm6clMCkdW9"),
    ("Lily", "pFZP5JQG7iQjIQuC4Bku"),
    ("Eric", "cjVigY5qzO86Huf0OWal"),
    ("Brian", "nPczCjzI2devNBz1zQrb"),
    ("George", "JBFqnCBsd6RMkjVDRZzb"),
];

impl Suite {
    /// Returns the CLI argument string for this suite.
    pub fn as_str(&self) -> &'static str {
        match self {
            Suite::Classic => "classic",
            Suite::Turbo => "turbo",
        }
    }

    /// Returns the synthesis model probed by this suite.
    pub fn model_id(&self) -> &'static str {
        match self {
            Suite::Classic => "eleven_monolingual_v1",
            Suite::Turbo => "eleven_turbo_v2_5",
        }
    }

    /// Returns the sentence synthesized for every voice.
    pub fn text(&self) -> &'static str {
        match self {
            Suite::Classic => "Hello, this is a test of the voice synthesis.",
            Suite::Turbo => "Hello! I'm your AI business assistant. How can I help you today?",
        }
    }

    /// Returns the voices probed by this suite, in probe order.
    pub fn voices(&self) -> Vec<VoiceEntry> {
        let table = match self {
            Suite::Classic => CLASSIC_VOICES,
            Suite::Turbo => TURBO_VOICES,
        };

        table
            .iter()
            .map(|(label, id)| VoiceEntry::new(*label, *id))
            .collect()
    }

    /// Whether the catalog is printed before probing.
    pub fn lists_catalog(&self) -> bool {
        matches!(self, Suite::Classic)
    }

    /// Whether successful samples are written to disk.
    pub fn saves_audio(&self) -> bool {
        matches!(self, Suite::Turbo)
    }
}
