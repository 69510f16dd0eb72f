//! Launcher error types

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Where the payload source came from, used to tell syntax errors apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Read from disk at startup.
    Loaded,
    /// Linked into the executable.
    Embedded,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Loaded => f.write_str("loaded"),
            Origin::Embedded => f.write_str("embedded"),
        }
    }
}

/// Every failure the launcher can report.
///
/// `Display` renders `<category>: <details>`; the launcher prefixes the
/// executable name when writing the diagnostic line.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("could not find executable path: {0}")]
    ExecutablePath(#[source] io::Error),

    #[error("failed to create Lua state: {0}")]
    RuntimeCreation(String),

    #[error("failed to publish arguments: {0}")]
    Arguments(String),

    #[error("error setting paths: {0}")]
    PathSetup(String),

    #[error("cannot read {}: {source}", path.display())]
    ScriptRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("syntax error in {origin} code: {message}")]
    Syntax { origin: Origin, message: String },

    #[error("runtime error: {0}")]
    Runtime(String),
}

impl LaunchError {
    /// Whether the process must stop with a failure status.
    ///
    /// Only path setup is tolerated: Lua still has its built-in search paths.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LaunchError::PathSetup(_))
    }

    pub fn syntax(origin: Origin, err: &mlua::Error) -> Self {
        LaunchError::Syntax {
            origin,
            message: lua_message(err),
        }
    }

    pub fn runtime(err: &mlua::Error) -> Self {
        LaunchError::Runtime(lua_message(err))
    }
}

const TRACEBACK_MARKER: &str = "\nstack traceback:";

/// Flatten an mlua error to the message Lua itself would print, without the
/// traceback mlua's message handler appends.
pub(crate) fn lua_message(err: &mlua::Error) -> String {
    match err {
        mlua::Error::SyntaxError { message, .. } => message.clone(),
        mlua::Error::RuntimeError(message) => strip_traceback(message).to_string(),
        mlua::Error::CallbackError { cause, .. } => lua_message(cause),
        other => strip_traceback(&other.to_string()).to_string(),
    }
}

fn strip_traceback(message: &str) -> &str {
    match message.find(TRACEBACK_MARKER) {
        Some(end) => &message[..end],
        None => message,
    }
}
