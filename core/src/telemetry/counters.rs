//! telemetry/counters.rs
//! Mutable counters used during a conversion.
//!
//! Summary: Collects input bytes, emitted text bytes and payload lines.
//! Converted into an immutable TelemetrySnapshot at the end of the run.
use serde::{Deserialize, Serialize};

use crate::headers::HeaderArtifact;

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub files_converted: u64,
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub payload_lines: u64,
}

impl TelemetryCounters {
    /// Record the raw input length.
    pub fn add_input(&mut self, len: usize) {
        self.bytes_read += len as u64;
    }

    /// Record one emitted artifact.
    pub fn add_artifact(&mut self, artifact: &HeaderArtifact) {
        self.files_converted += 1;
        self.bytes_written += artifact.as_bytes().len() as u64;
        self.payload_lines += artifact.payload_lines() as u64;
    }

    /// Ratio of emitted text to raw payload (0 for empty input).
    pub fn expansion_ratio(&self) -> f64 {
        if self.bytes_read == 0 {
            0.0
        } else {
            self.bytes_written as f64 / self.bytes_read as f64
        }
    }
}
