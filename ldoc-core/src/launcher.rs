//! Launcher
//!
//! The whole startup sequence: locate the install root, prepare a Lua state,
//! then hand control to the payload.

use std::ffi::OsStr;
use std::io::Write;
use std::process::ExitCode;

use tracing::{debug, info, warn};

use crate::bridge::BRIDGE_SOURCE;
use crate::error::LaunchError;
use crate::install::{install_root, CurrentExe, ExecutableLocator};
use crate::payload::Payload;
use crate::runtime::Runtime;
use crate::templates::{LUA_PATHS, NATIVE_PATHS};

/// Compile-time description of one launcher build.
#[derive(Debug, Clone, Copy)]
pub struct LauncherConfig {
    /// Prefix of every diagnostic line.
    pub app_name: &'static str,
    pub payload: Payload,
    pub lua_paths: &'static [&'static str],
    pub native_paths: &'static [&'static str],
    /// Lua chunk returning the search path routine.
    pub bridge: &'static str,
}

impl LauncherConfig {
    /// Load `<root>/bin/<file_name>` at startup.
    pub fn installed(app_name: &'static str, file_name: &'static str) -> Self {
        Self::with_payload(app_name, Payload::Installed { file_name })
    }

    /// Run source linked into the binary.
    pub fn embedded(
        app_name: &'static str,
        chunk_name: &'static str,
        source: &'static [u8],
    ) -> Self {
        Self::with_payload(app_name, Payload::Embedded { chunk_name, source })
    }

    fn with_payload(app_name: &'static str, payload: Payload) -> Self {
        Self {
            app_name,
            payload,
            lua_paths: LUA_PATHS,
            native_paths: NATIVE_PATHS,
            bridge: BRIDGE_SOURCE,
        }
    }
}

pub struct Launcher<L = CurrentExe> {
    config: LauncherConfig,
    locator: L,
}

impl Launcher<CurrentExe> {
    pub fn new(config: LauncherConfig) -> Self {
        Self {
            config,
            locator: CurrentExe,
        }
    }
}

impl<L: ExecutableLocator> Launcher<L> {
    /// Swap the source of the executable path.
    pub fn with_locator<M: ExecutableLocator>(self, locator: M) -> Launcher<M> {
        Launcher {
            config: self.config,
            locator,
        }
    }

    /// Run the payload with `args` as its `arg` table.
    ///
    /// A failed search path setup is written to `diag` and startup goes on;
    /// every other failure is returned and ends the run. The Lua state is
    /// closed before this returns.
    pub fn run<I, S>(&self, args: I, diag: &mut dyn Write) -> Result<(), LaunchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let exe = self
            .locator
            .current_exe()
            .map_err(LaunchError::ExecutablePath)?;
        let root = install_root(&exe);
        debug!("Executable at {}, install root {}", exe.display(), root.display());

        let runtime = Runtime::new()?;
        runtime.publish_args(args)?;

        if let Err(err) = runtime.set_search_paths(
            self.config.bridge,
            &root,
            self.config.lua_paths,
            self.config.native_paths,
        ) {
            if err.is_fatal() {
                return Err(err);
            }
            warn!("Continuing with default search paths: {}", err);
            self.report(&err, diag);
        }

        let script = self.config.payload.load(&root)?;
        info!("Starting payload {}", script.chunk_name);
        runtime.execute(&script)
    }

    /// Run and turn the outcome into a process exit status.
    pub fn launch<I, S>(&self, args: I, diag: &mut dyn Write) -> ExitCode
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        match self.run(args, diag) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                self.report(&err, diag);
                ExitCode::FAILURE
            }
        }
    }

    /// Write the `<app>: <category>: <details>` line for `err`.
    pub fn report(&self, err: &LaunchError, diag: &mut dyn Write) {
        let _ = writeln!(diag, "{}: {}", self.config.app_name, err);
        let _ = diag.flush();
    }
}
