//! src/headers/encode.rs
//!
//! Header encoding utilities.
//!
//! Design notes:
//! - `HeaderView` is the single renderer; `encode_header` collects it into a
//!   `String` and `write_header` streams it into any `io::Write`.
//! - Output must stay byte-for-byte stable: downstream firmware builds
//!   compile the emitted text directly.

use std::fmt;
use std::io::{self, Write};

use crate::constants::{ARRAY_CTYPE, BYTES_PER_LINE, LEN_CTYPE, LINE_INDENT};
use crate::headers::types::{HeaderArtifact, Identifier};

/// Borrowed view over (bytes, identifier) that renders the full header.
#[derive(Debug, Clone, Copy)]
pub struct HeaderView<'a> {
    pub bytes: &'a [u8],
    pub identifier: &'a Identifier,
}

impl<'a> HeaderView<'a> {
    pub fn new(bytes: &'a [u8], identifier: &'a Identifier) -> Self {
        Self { bytes, identifier }
    }
}

impl fmt::Display for HeaderView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.identifier.guard_token();
        let name = self.identifier.as_str();

        writeln!(f, "#ifndef {}", guard)?;
        writeln!(f, "#define {}", guard)?;
        writeln!(f)?;
        writeln!(f, "{} {}[] = {{", ARRAY_CTYPE, name)?;

        // Index 0 opens the first line too, so the body never shares a line with `{`.
        for (i, byte) in self.bytes.iter().enumerate() {
            if i % BYTES_PER_LINE == 0 {
                write!(f, "\n{}", LINE_INDENT)?;
            }
            write!(f, "0x{:02X}, ", byte)?;
        }

        f.write_str("\n};\n\n")?;
        writeln!(f, "{} {} = {};", LEN_CTYPE, self.identifier.len_name(), self.bytes.len())?;
        writeln!(f)?;
        writeln!(f, "#endif // {}", guard)
    }
}

/// Render `bytes` as a guarded C array named `identifier`.
pub fn encode_header(bytes: &[u8], identifier: &Identifier) -> HeaderArtifact {
    let text = HeaderView::new(bytes, identifier).to_string();
    HeaderArtifact::new(identifier.clone(), bytes.len(), text)
}

/// Stream the same text as `encode_header` into `w`.
#[inline]
pub fn write_header<W: Write>(w: &mut W, bytes: &[u8], identifier: &Identifier) -> io::Result<()> {
    write!(w, "{}", HeaderView::new(bytes, identifier))
}

/// Payload lines produced for `len` bytes.
pub fn payload_line_count(len: usize) -> usize {
    len.div_ceil(BYTES_PER_LINE)
}
