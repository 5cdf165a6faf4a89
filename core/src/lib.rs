//! modelhdr-core
//!
//! Turns an exported model binary into a C header holding the bytes as a
//! `const unsigned char` array plus its length.
//! No CLI concerns here; see the `cli` crate.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;

pub mod headers;
pub mod io;
pub mod telemetry;

// Public entry points
pub mod convert;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::ConverterConfig;
    pub use crate::convert::{
        convert_file, convert_to_header, convert_with_config, verify_header_file, ApiConfig,
        ConvertParams, ConvertReport,
    };
    pub use crate::headers::{decode_header, encode_header, write_header, HeaderArtifact, Identifier};
    pub use crate::io::{InputSource, OutputSink, WritePolicy};
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::ConvertError;
}
