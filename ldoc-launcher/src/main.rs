//! LDoc Launcher
//!
//! Finds its install root, prepares an embedded Lua state and runs the LDoc
//! script with the process arguments. Stdout belongs to the script;
//! diagnostics and logs go to stderr.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use ldoc_core::Launcher;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_env(config::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("{}: {:#}", config::APP_NAME, e);
    }

    let launcher = Launcher::new(config::launcher_config());
    debug!("{} starting", config::APP_NAME);

    let status = launcher.launch(std::env::args_os(), &mut io::stderr());
    debug!("{} exiting", config::APP_NAME);
    status
}
