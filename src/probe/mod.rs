//! Voice probe runner.
//!
//! Runs one synthesis request per configured voice, classifies each response
//! and optionally saves the returned audio. Requests are issued strictly one
//! after another in list order; a failure only ends the probe it occurred in.

mod report;
mod runner;
mod session;

pub use report::{
    WORKS_MARKER, write_banner, write_catalog, write_probe_result, write_probe_started,
    write_summary,
};
pub use runner::{ProbeEvent, ProbeOutcome, ProbeReport, ProbeResult, ProbeRunner};
pub use session::{SessionMode, list_voices, run_probes, run_session};
