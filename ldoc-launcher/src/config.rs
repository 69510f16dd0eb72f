//! Build configuration
//!
//! The launcher takes no flags; what it runs is decided at compile time.

use ldoc_core::LauncherConfig;

/// Prefix of every diagnostic line.
pub const APP_NAME: &str = "ldoc";

/// Payload file looked up in `<root>/bin` by the default build.
pub const SCRIPT_NAME: &str = "ldoc.lua";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LDOC_LOG";

/// Log filter used when `LDOC_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "error";

#[cfg(feature = "embedded")]
static EMBEDDED_SCRIPT: &[u8] = include_bytes!(env!("LDOC_EMBEDDED_SCRIPT"));

#[cfg(feature = "embedded")]
pub fn launcher_config() -> LauncherConfig {
    LauncherConfig::embedded(APP_NAME, SCRIPT_NAME, EMBEDDED_SCRIPT)
}

#[cfg(not(feature = "embedded"))]
pub fn launcher_config() -> LauncherConfig {
    LauncherConfig::installed(APP_NAME, SCRIPT_NAME)
}
