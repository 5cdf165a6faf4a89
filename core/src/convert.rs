// Stable public API: read -> encode -> write, with telemetry.

use std::path::Path;

use log::{debug, info};

use crate::config::ConverterConfig;
use crate::headers::{check_layout, decode_header, encode_header, DecodedHeader, Identifier};
use crate::io::{read_source, write_artifact, InputSource, OutputSink, WritePolicy};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::ConvertError;
use crate::utils::{fmt_bytes, fmt_size};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertParams {
    pub identifier: Identifier,
}

impl ConvertParams {
    pub fn new(identifier: impl Into<Identifier>) -> Self {
        Self { identifier: identifier.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    /// How file destinations are replaced.
    pub write_policy: WritePolicy,
    /// Also return the rendered text in the report (tests, piping).
    pub with_buf: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { write_policy: WritePolicy::Atomic, with_buf: false }
    }
}

impl ApiConfig {
    pub fn new(write_policy: WritePolicy) -> Self {
        Self { write_policy, with_buf: false }
    }

    pub fn with_buf_enabled() -> Self {
        Self { with_buf: true, ..Self::default() }
    }
}

#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub snapshot: TelemetrySnapshot,
    /// Rendered text when the sink was `Memory` or `with_buf` was set.
    pub output: Option<Vec<u8>>,
}

/// Convert `input` into a guarded C array written to `output`.
///
/// The input is read completely before the output is touched, so a missing
/// or unreadable input never creates or truncates the destination.
pub fn convert_to_header(
    input: InputSource,
    output: OutputSink,
    params: &ConvertParams,
    config: &ApiConfig,
) -> Result<ConvertReport, ConvertError> {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();

    let source = timer.time(Stage::Read, || read_source(input))?;
    counters.add_input(source.len());
    debug!("payload {}", fmt_bytes(source.as_bytes()));

    let artifact = timer.time(Stage::Encode, || encode_header(source.as_bytes(), &params.identifier));
    counters.add_artifact(&artifact);

    let target = output.describe();
    let written = timer.time(Stage::Write, || write_artifact(output, &artifact, config.write_policy))?;

    timer.finish();
    info!(
        "{}: {} -> {} ({} lines, {})",
        params.identifier,
        fmt_size(counters.bytes_read),
        target,
        counters.payload_lines,
        config.write_policy,
    );

    let output = match written {
        Some(buf) => Some(buf),
        None if config.with_buf => Some(artifact.into_string().into_bytes()),
        None => None,
    };

    Ok(ConvertReport {
        snapshot: TelemetrySnapshot::from(params.identifier.as_str(), &counters, &timer),
        output,
    })
}

/// Path-based conversion with the existence preflight.
pub fn convert_file(
    input: &Path,
    output: &Path,
    name: &str,
    policy: WritePolicy,
) -> Result<TelemetrySnapshot, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound { path: input.to_path_buf() });
    }

    let report = convert_to_header(
        InputSource::File(input.to_path_buf()),
        OutputSink::File(output.to_path_buf()),
        &ConvertParams::new(name),
        &ApiConfig::new(policy),
    )?;
    Ok(report.snapshot)
}

/// Run a conversion described by a `ConverterConfig`.
pub fn convert_with_config(cfg: &ConverterConfig) -> Result<TelemetrySnapshot, ConvertError> {
    convert_file(&cfg.input_file, &cfg.output_file, &cfg.variable_name, cfg.write_policy)
}

/// Parse a header file, check its layout and optionally compare its payload
/// against the original binary.
pub fn verify_header_file(header: &Path, against: Option<&Path>) -> Result<DecodedHeader, ConvertError> {
    let text = read_source(InputSource::File(header.to_path_buf()))?;
    let text = String::from_utf8_lossy(text.as_bytes());

    let decoded = decode_header(&text)?;
    check_layout(&text)?;

    if let Some(bin) = against {
        let expected = read_source(InputSource::File(bin.to_path_buf()))?;
        if expected.as_bytes() != decoded.bytes.as_slice() {
            let at = expected
                .as_bytes()
                .iter()
                .zip(&decoded.bytes)
                .position(|(a, b)| a != b)
                .unwrap_or_else(|| expected.len().min(decoded.bytes.len()));
            return Err(ConvertError::PayloadMismatch {
                offset: at,
                expected_len: expected.len(),
                actual_len: decoded.bytes.len(),
            });
        }
    }

    debug!("verified {} ({} bytes)", decoded.identifier, decoded.bytes.len());
    Ok(decoded)
}
