use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::headers::HeaderError;

/// Unified conversion error covering input, output and header validation.
/// - Path-carrying variants keep the user-facing messages stable.
/// - `From<HeaderError>` enables `?` on the verify path.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input path does not exist.
    #[error("{} does not exist.", path.display())]
    InputNotFound { path: PathBuf },

    /// Input exists but could not be opened or read.
    #[error("cannot read {}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination could not be created, written or published.
    #[error("cannot write {target}")]
    OutputWriteFailure {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Header payload differs from the binary it was checked against.
    #[error("payload differs at byte {offset} (binary has {expected_len} bytes, header has {actual_len})")]
    PayloadMismatch {
        offset: usize,
        expected_len: usize,
        actual_len: usize,
    },

    /// Header text failed to parse or validate.
    #[error("invalid header")]
    Header(#[from] HeaderError),
}

impl ConvertError {
    pub fn output(target: impl Into<String>, source: io::Error) -> Self {
        ConvertError::OutputWriteFailure { target: target.into(), source }
    }

    /// True for the missing-input preflight failure.
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, ConvertError::InputNotFound { .. })
    }
}
