//! LDoc Launcher Core Library
//!
//! Everything the `ldoc` executable does before the documentation tool takes
//! over:
//! - Install root discovery from the executable's own path
//! - Lua search path setup (`package.path` / `package.cpath`)
//! - Loading and running the LDoc script, from disk or embedded

pub mod bridge;
pub mod error;
pub mod install;
pub mod launcher;
pub mod payload;
pub mod runtime;
pub mod templates;

pub use error::{LaunchError, Origin};
pub use install::{install_root, CurrentExe, ExecutableLocator};
pub use launcher::{Launcher, LauncherConfig};
pub use payload::{Payload, Script};
pub use runtime::Runtime;
