// ## Normalized I/O + output publishing

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use log::debug;
use serde::{Deserialize, Serialize};
use tempfile::Builder;

use crate::headers::HeaderArtifact;
use crate::types::ConvertError;

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
    Memory,
}

impl OutputSink {
    /// Name used in error messages and logs.
    pub fn describe(&self) -> String {
        match self {
            OutputSink::Writer(_) => "<writer>".to_string(),
            OutputSink::File(p) => p.display().to_string(),
            OutputSink::Memory => "<memory>".to_string(),
        }
    }
}

/// How a file destination is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    /// Write a sibling temp file, then rename it over the destination.
    #[default]
    Atomic,
    /// Truncate and write the destination directly.
    InPlace,
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WritePolicy::Atomic => "atomic",
            WritePolicy::InPlace => "in-place",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for WritePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "atomic" => Ok(WritePolicy::Atomic),
            "in-place" | "inplace" | "in_place" => Ok(WritePolicy::InPlace),
            other => Err(format!("unknown write policy `{}` (expected atomic or in-place)", other)),
        }
    }
}

/// Immutable bytes read from an input source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ByteSource {
    data: Bytes,
}

impl ByteSource {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for ByteSource {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// Open a file for reading, separating "missing" from "unreadable".
pub fn open_input_file(path: &Path) -> Result<File, ConvertError> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConvertError::InputNotFound { path: path.to_path_buf() },
        _ => ConvertError::InputUnreadable { path: path.to_path_buf(), source: e },
    })
}

/// Read the whole input. The file handle is closed before returning.
pub fn read_source(src: InputSource) -> Result<ByteSource, ConvertError> {
    let (origin, mut reader): (PathBuf, Box<dyn Read + Send>) = match src {
        InputSource::Memory(b) => return Ok(ByteSource::new(b)),
        InputSource::Reader(r) => (PathBuf::from("<reader>"), r),
        InputSource::File(p) => {
            let f = open_input_file(&p)?;
            (p, Box::new(f) as Box<dyn Read + Send>)
        }
    };

    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| ConvertError::InputUnreadable { path: origin.clone(), source: e })?;

    debug!("read {} bytes from {}", buf.len(), origin.display());
    Ok(ByteSource::new(buf))
}

/// Write the artifact to `sink`.
///
/// Returns the written bytes for `OutputSink::Memory`, `None` otherwise.
pub fn write_artifact(
    sink: OutputSink,
    artifact: &HeaderArtifact,
    policy: WritePolicy,
) -> Result<Option<Vec<u8>>, ConvertError> {
    let target = sink.describe();
    match sink {
        OutputSink::Memory => Ok(Some(artifact.as_bytes().to_vec())),
        OutputSink::Writer(mut w) => {
            artifact
                .write_to(&mut w)
                .and_then(|_| w.flush())
                .map_err(|e| ConvertError::output(target, e))?;
            Ok(None)
        }
        OutputSink::File(path) => {
            let written = match policy {
                WritePolicy::Atomic => write_atomic(&path, artifact),
                WritePolicy::InPlace => write_in_place(&path, artifact),
            };
            written.map_err(|e| ConvertError::output(target, e))?;
            Ok(None)
        }
    }
}

fn write_in_place(path: &Path, artifact: &HeaderArtifact) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    artifact.write_to(&mut w)?;
    w.flush()
}

// The temp file lives next to the destination so the final rename never
// crosses a filesystem. Dropping it on an error path deletes it.
// The published file gets the destination's existing permissions, or the
// umask-filtered default that `File::create` would give a new file.
fn write_atomic(path: &Path, artifact: &HeaderArtifact) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path).ok().map(|m| m.permissions());

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(dir)?;
    {
        let mut w = BufWriter::new(tmp.as_file_mut());
        artifact.write_to(&mut w)?;
        w.flush()?;
    }
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms)?;
    }
    tmp.as_file().sync_all()?;
    debug!("publishing {} via {}", path.display(), tmp.path().display());
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
