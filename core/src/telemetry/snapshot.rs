//! telemetry/snapshot.rs
//!
//! Immutable telemetry snapshot for one conversion.
//! Serializes to JSON for `modelhdr convert --stats`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub identifier: String,
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub payload_lines: u64,
    pub expansion_ratio: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(identifier: &str, counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        Self {
            identifier: identifier.to_string(),
            bytes_read: counters.bytes_read,
            bytes_written: counters.bytes_written,
            payload_lines: counters.payload_lines,
            expansion_ratio: counters.expansion_ratio(),
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Stage times never exceed the wall clock of the run.
    pub fn sanity_check(&self) -> bool {
        self.total_stage_time() <= self.elapsed
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
