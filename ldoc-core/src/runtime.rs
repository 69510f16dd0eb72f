//! Lua runtime
//!
//! Owns the single Lua state of a launcher run. The state is closed when the
//! `Runtime` is dropped, on every exit path.

use std::any::Any;
use std::ffi::OsStr;
use std::panic;
use std::path::Path;

use mlua::{Lua, LuaOptions, StdLib};
use tracing::debug;

use crate::bridge;
use crate::error::{lua_message, LaunchError};
use crate::install::os_bytes;
use crate::payload::Script;
use crate::templates::LUA_VERSION;

/// A Lua state with the full standard library loaded.
pub struct Runtime {
    lua: Lua,
}

impl Runtime {
    /// Create a fresh state and open every standard library.
    ///
    /// Unsafe mode is needed so native modules on `package.cpath` can load.
    pub fn new() -> Result<Self, LaunchError> {
        let lua = panic::catch_unwind(|| unsafe {
            Lua::unsafe_new_with(StdLib::ALL, LuaOptions::new())
        })
        .map_err(|payload| LaunchError::RuntimeCreation(panic_message(payload.as_ref())))?;
        debug!("Lua {} state created", LUA_VERSION);
        Ok(Self { lua })
    }

    /// Expose the process arguments as the global `arg`, starting at index 0.
    pub fn publish_args<I, S>(&self, args: I) -> Result<(), LaunchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let publish = || -> mlua::Result<()> {
            let table = self.lua.create_table()?;
            for (index, arg) in args.into_iter().enumerate() {
                let value = self.lua.create_string(os_bytes(arg.as_ref()))?;
                table.raw_set(index, value)?;
            }
            self.lua.globals().set("arg", table)
        };
        publish().map_err(|e| LaunchError::Arguments(lua_message(&e)))
    }

    /// Point `package.path` and `package.cpath` below `install_root`, using
    /// the routine defined by the `bridge` chunk.
    pub fn set_search_paths(
        &self,
        bridge: &str,
        install_root: &Path,
        lua_paths: &[&str],
        native_paths: &[&str],
    ) -> Result<(), LaunchError> {
        let apply = || -> mlua::Result<()> {
            let set_paths = bridge::define(&self.lua, bridge)?;
            let base = self.lua.create_string(os_bytes(install_root.as_os_str()))?;
            let paths = self.lua.create_sequence_from(lua_paths.iter().copied())?;
            let cpaths = self.lua.create_sequence_from(native_paths.iter().copied())?;
            set_paths.call::<()>((base, paths, cpaths))
        };
        apply().map_err(|e| LaunchError::PathSetup(lua_message(&e)))
    }

    /// Compile the script, then run it. Return values are discarded.
    pub fn execute(&self, script: &Script<'_>) -> Result<(), LaunchError> {
        let chunk = self
            .lua
            .load(script.source.as_ref())
            .set_name(script.chunk_name.as_str())
            .into_function()
            .map_err(|e| LaunchError::syntax(script.origin, &e))?;
        debug!("Running {}", script.chunk_name);
        chunk.call::<()>(()).map_err(|e| LaunchError::runtime(&e))
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        debug!("Closing Lua state");
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown error".to_string()
    }
}
