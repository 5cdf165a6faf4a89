//! headers/mod.rs
//! C header emission and parsing.
//!
//! Notes:
//! - Include guard is `<NAME_UPPER>_H`; array and length names keep the caller's case.
//! - Payload is wrapped at 12 bytes per line, each line indented by four spaces.
//! - The text layout is a compatibility contract with downstream firmware builds.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
