//! Payload script
//!
//! The script the launcher exists to run, either installed next to the
//! executable or linked into it at build time.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LaunchError, Origin};

/// How a build finds its payload.
#[derive(Debug, Clone, Copy)]
pub enum Payload {
    /// `<root>/bin/<file_name>`, read at startup.
    Installed { file_name: &'static str },
    /// Source baked into the binary. Must not start with a `#!` line.
    Embedded {
        chunk_name: &'static str,
        source: &'static [u8],
    },
}

/// A payload ready to be compiled.
#[derive(Debug)]
pub struct Script<'a> {
    pub chunk_name: String,
    pub source: Cow<'a, [u8]>,
    pub origin: Origin,
}

impl Payload {
    /// Path of an installed payload under `install_root`.
    pub fn installed_path(file_name: &str, install_root: &Path) -> PathBuf {
        install_root.join("bin").join(file_name)
    }

    pub fn load(&self, install_root: &Path) -> Result<Script<'static>, LaunchError> {
        match *self {
            Payload::Installed { file_name } => {
                let path = Self::installed_path(file_name, install_root);
                debug!("Loading payload from {}", path.display());
                let bytes = std::fs::read(&path).map_err(|source| LaunchError::ScriptRead {
                    path: path.clone(),
                    source,
                })?;
                Ok(Script {
                    chunk_name: format!("@{}", path.display()),
                    source: Cow::Owned(skip_directive(bytes)),
                    origin: Origin::Loaded,
                })
            }
            Payload::Embedded { chunk_name, source } => {
                debug!("Using embedded payload {} ({} bytes)", chunk_name, source.len());
                Ok(Script {
                    chunk_name: format!("@{}", chunk_name),
                    source: Cow::Borrowed(source),
                    origin: Origin::Embedded,
                })
            }
        }
    }
}

/// Drop a leading `#...` line the way `loadfile` does, keeping its newline
/// so reported line numbers still match the file.
fn skip_directive(mut bytes: Vec<u8>) -> Vec<u8> {
    if bytes.first() != Some(&b'#') {
        return bytes;
    }
    let end = bytes
        .iter()
        .position(|&b| b == b'\n')
        .unwrap_or(bytes.len());
    bytes.drain(..end);
    bytes
}
