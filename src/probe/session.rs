//! A complete CLI run: optional catalog listing, probes, summary.

use std::io::{self, Write};

use crate::backend::Backend;
use crate::config::VoiceEntry;

use super::report::{
    write_banner, write_catalog, write_probe_result, write_probe_started, write_summary,
};
use super::runner::{ProbeEvent, ProbeReport, ProbeRunner};

/// What a run prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Print the voice catalog and stop.
    CatalogOnly,
    /// Print the voice catalog, then probe every voice.
    CatalogThenProbes,
    /// Probe every voice.
    ProbesOnly,
}

impl SessionMode {
    /// `--list-voices` wins over the configured catalog listing.
    pub fn select(catalog_only: bool, list_catalog: bool) -> Self {
        match (catalog_only, list_catalog) {
            (true, _) => SessionMode::CatalogOnly,
            (false, true) => SessionMode::CatalogThenProbes,
            (false, false) => SessionMode::ProbesOnly,
        }
    }
}

/// Run a session, writing all console output to `out`.
///
/// Probe failures are part of the output, never an error; only a failed
/// write is returned as `Err`.
pub fn run_session<W: Write, B: Backend>(
    out: &mut W,
    runner: &ProbeRunner<B>,
    voices: &[VoiceEntry],
    mode: SessionMode,
) -> io::Result<()> {
    match mode {
        SessionMode::CatalogOnly => list_voices(out, runner),
        SessionMode::CatalogThenProbes => {
            list_voices(out, runner)?;
            writeln!(out)?;
            run_probes(out, runner, voices).map(|_| ())
        }
        SessionMode::ProbesOnly => run_probes(out, runner, voices).map(|_| ()),
    }
}

/// Fetch and print the voice catalog.
pub fn list_voices<W: Write, B: Backend>(out: &mut W, runner: &ProbeRunner<B>) -> io::Result<()> {
    write_banner(out, "Fetching available voices")?;
    write_catalog(out, &runner.list_voices())
}

/// Probe every voice, printing progress as it goes, then the summary.
///
/// Once a write fails the remaining probes still run, but nothing more is
/// printed and the write error is returned.
pub fn run_probes<W: Write, B: Backend>(
    out: &mut W,
    runner: &ProbeRunner<B>,
    voices: &[VoiceEntry],
) -> io::Result<ProbeReport> {
    write_banner(
        out,
        &format!(
            "Testing {} voices with model {}",
            voices.len(),
            runner.request().model_id
        ),
    )?;
    writeln!(out)?;

    let mut write_result: io::Result<()> = Ok(());
    let report = runner.run(voices, |event| {
        if write_result.is_err() {
            return;
        }
        write_result = match event {
            ProbeEvent::Started(voice) => {
                write_probe_started(&mut *out, voice).and_then(|_| out.flush())
            }
            ProbeEvent::Finished(result) => write_probe_result(&mut *out, result),
        };
    });
    write_result?;

    write_summary(out, &report)?;
    Ok(report)
}
