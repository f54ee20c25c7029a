//! Tracing setup for orderdesk
//!
//! The terminal UI owns stdout, so interactive sessions log to a file.
//! One-shot commands log to stderr.
//!
//! Usage:
//!   orderdesk --debug                   # Debug logging
//!   RUST_LOG=orderdesk_core=debug ...   # Fine-grained log control

use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets the default filter to debug)
    pub debug: bool,
    /// Default filter when RUST_LOG is unset and debug is off
    pub default_level: Option<String>,
    /// Append logs to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        let level = if self.debug {
            "debug"
        } else {
            self.default_level.as_deref().unwrap_or("info")
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }
}

/// Initialize tracing based on configuration
pub fn init(config: &TracingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(config.debug) // Show targets in debug mode
        .compact();

    match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .context(format!("Failed to create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .context(format!("Failed to open log file {}", path.display()))?;

            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|err| anyhow!(err))
        }
        None => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|err| anyhow!(err)),
    }
}

/// Initialize tracing, or run without logs if that fails.
///
/// Returns whether logging is active.
pub fn init_or_disable(config: &TracingConfig) -> bool {
    match init(config) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("warning: logging disabled: {:#}", err);
            false
        }
    }
}
