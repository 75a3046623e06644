//! Console rendering of catalog listings and probe results.

use std::io::{self, Write};

use crate::backend::{BackendError, VoiceInfo};
use crate::config::VoiceEntry;

use super::runner::{ProbeOutcome, ProbeReport, ProbeResult};

const RULE_WIDTH: usize = 60;

/// Marker printed for every voice that produced audio.
pub const WORKS_MARKER: &str = "WORKS";

/// Print a titled section separator.
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}

/// Print the voice catalog, or why it could not be fetched.
pub fn write_catalog<W: Write>(
    out: &mut W,
    catalog: &Result<Vec<VoiceInfo>, BackendError>,
) -> io::Result<()> {
    let voices = match catalog {
        Ok(voices) => voices,
        Err(BackendError::RequestFailed { status, body }) => {
            writeln!(out, "API error: {status}")?;
            return writeln!(out, "Response: {body}");
        }
        Err(err) => return writeln!(out, "Error: {err}"),
    };

    writeln!(out, "API key is valid. Found {} voices", voices.len())?;
    writeln!(out)?;

    for voice in voices {
        writeln!(out, "Name: {}", voice.name)?;
        writeln!(out, "  ID: {}", voice.voice_id)?;
        writeln!(
            out,
            "  Category: {}",
            voice.category.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            out,
            "  Description: {}",
            voice.description.as_deref().unwrap_or("N/A")
        )?;

        if voice.is_premade() {
            writeln!(out, "  FREE TIER COMPATIBLE")?;
        } else if let Some(use_case) = voice.use_case() {
            writeln!(out, "  Use case: {use_case}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

pub fn write_probe_started<W: Write>(out: &mut W, voice: &VoiceEntry) -> io::Result<()> {
    writeln!(out, "Testing {} ({})...", voice.label, voice.id)
}

/// Print the outcome of one probe.
pub fn write_probe_result<W: Write>(out: &mut W, result: &ProbeResult) -> io::Result<()> {
    let label = &result.voice.label;

    match &result.outcome {
        ProbeOutcome::Success {
            audio_bytes,
            saved_to,
        } => {
            writeln!(
                out,
                "  {label} - {WORKS_MARKER}! Audio: {} bytes",
                group_thousands(*audio_bytes)
            )?;
            if let Some(path) = saved_to {
                writeln!(out, "    Saved to: {}", path.display())?;
            }
        }
        ProbeOutcome::SaveFailed {
            audio_bytes,
            message,
        } => {
            writeln!(
                out,
                "  {label} - {WORKS_MARKER}! Audio: {} bytes",
                group_thousands(*audio_bytes)
            )?;
            writeln!(out, "    Could not save sample: {message}")?;
        }
        ProbeOutcome::HttpError { status, message } => {
            writeln!(out, "  {label} - Error {status}: {message}")?;
        }
        ProbeOutcome::TransportError { message } => {
            writeln!(out, "  {label} - Exception: {message}")?;
        }
    }

    writeln!(out)
}

/// Print the closing summary and the voices worth configuring.
pub fn write_summary<W: Write>(out: &mut W, report: &ProbeReport) -> io::Result<()> {
    write_banner(out, "Test complete")?;
    writeln!(
        out,
        "Working voices: {}/{}",
        report.working(),
        report.results.len()
    )?;

    let saved = report
        .results
        .iter()
        .filter(|r| matches!(r.outcome, ProbeOutcome::Success { saved_to: Some(_), .. }))
        .count();
    if saved > 0 {
        writeln!(out, "Saved {saved} samples; play the test_*.mp3 files to compare them")?;
    }

    if report.working() == 0 {
        return writeln!(out, "No voice produced audio. Check the API key and model.");
    }

    writeln!(out)?;
    writeln!(out, "Use one of the working voices in your environment:")?;
    for voice in report.working_voices() {
        writeln!(out, "  {:<10} ELEVENLABS_VOICE_ID={}", voice.label, voice.id)?;
    }

    Ok(())
}

/// Format a byte count with comma thousands separators.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
