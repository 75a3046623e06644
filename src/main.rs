//! voice-probe CLI entry point.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use voice_probe::backend::create_backend;
use voice_probe::cli::Args;
use voice_probe::config::{ConfigFile, ProbeConfig};
use voice_probe::probe::{ProbeRunner, SessionMode, run_session};

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over --verbose
    let default_filter = if args.verbose {
        "voice_probe=debug"
    } else {
        "voice_probe=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let file = ConfigFile::discover(args.config.as_deref()).context("Failed to load config file")?;
    let config = ProbeConfig::resolve(args.suite, file, args.overrides())?;

    let backend = create_backend(&config);
    debug!(
        suite = args.suite.as_str(),
        base_url = backend.base_url(),
        voices = config.voices.len(),
        "configuration resolved"
    );
    let runner = ProbeRunner::from_config(backend, &config);

    let mode = SessionMode::select(args.list_voices, config.list_catalog);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Failed probes are reported in the output, not through the exit status.
    run_session(&mut out, &runner, &config.voices, mode).context("Failed to write output")
}
