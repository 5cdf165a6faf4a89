//! headers/types.rs
//! Identifier, artifact and decoded-header types.
//!
//! Notes:
//! - The identifier is trusted as given; no sanitizing happens here.
//! - Guard tokens use the uppercased identifier, variable names keep its case.
//! - An artifact is plain text fully determined by (bytes, identifier).

use std::fmt;
use std::io::{self, Write};

use thiserror::Error;

use crate::constants::{GUARD_SUFFIX, LEN_SUFFIX};

/// Caller-supplied name for the emitted array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<NAME_UPPER>_H`
    pub fn guard_token(&self) -> String {
        format!("{}{}", self.0.to_uppercase(), GUARD_SUFFIX)
    }

    /// `<name>_len`
    pub fn len_name(&self) -> String {
        format!("{}{}", self.0, LEN_SUFFIX)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Rendered header text plus the facts it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderArtifact {
    identifier: Identifier,
    byte_len: usize,
    text: String,
}

impl HeaderArtifact {
    pub(crate) fn new(identifier: Identifier, byte_len: usize, text: String) -> Self {
        Self { identifier, byte_len, text }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Payload byte count (the value of `<name>_len`).
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of payload lines in the array body.
    pub fn payload_lines(&self) -> usize {
        crate::headers::payload_line_count(self.byte_len)
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.text.as_bytes())
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Result of parsing an emitted header back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHeader {
    pub identifier: Identifier,
    pub guard: String,
    pub bytes: Vec<u8>,
    pub declared_len: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// One of the `#ifndef` / `#define` / `#endif` lines is absent.
    #[error("missing include guard directive `{directive}`")]
    MissingGuard { directive: &'static str },

    /// Guard tokens disagree with each other or with the identifier.
    #[error("include guard mismatch: expected `{expected}`, found `{found}`")]
    GuardMismatch { expected: String, found: String },

    /// No `const unsigned char <name>[] = {` line.
    #[error("missing array declaration")]
    MissingDeclaration,

    /// A payload token is not `0xHH,`.
    #[error("line {line}: bad byte token `{token}`")]
    BadByteToken { line: usize, token: String },

    /// Array body never closed with `};`.
    #[error("array body is not terminated by `}};`")]
    Unterminated,

    /// No `const unsigned int <name>_len = N;` line.
    #[error("missing length constant")]
    MissingLength,

    /// Length constant names a different array.
    #[error("length constant `{found}` does not match array `{expected}`")]
    NameMismatch { expected: String, found: String },

    /// Declared length differs from the payload.
    #[error("declared length {declared} does not match payload length {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    /// Payload line wrapping differs from the fixed layout.
    #[error("line {line}: {tokens} byte tokens where {expected} were expected")]
    LayoutViolation { line: usize, tokens: usize, expected: usize },
}
