//! Logging Setup
//!
//! The subscriber is installed before configuration is read, so the filter sits
//! behind a reload handle and the configured level is applied afterwards.

use tracing::{Level, warn};
use tracing_subscriber::filter::{Directive, EnvFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, reload};

/// Handle for swapping the active log filter
pub type LogFilterHandle = reload::Handle<EnvFilter, Registry>;

fn env_filter(directive: Directive) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(directive)
}

/// Install the global subscriber at `info`, honoring `RUST_LOG`
pub fn init_tracing() -> LogFilterHandle {
    let (filter, handle) = reload::Layer::new(env_filter(Level::INFO.into()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
    handle
}

/// Parse a level directive such as `debug` or `injecare_lang=trace`
pub fn parse_log_level(level: &str) -> Option<Directive> {
    level.parse().ok()
}

/// Switch to the configured level; invalid values keep the current filter
pub fn apply_log_level(handle: &LogFilterHandle, level: &str) {
    let Some(directive) = parse_log_level(level) else {
        warn!(level, "Ignoring invalid log level");
        return;
    };
    if let Err(e) = handle.reload(env_filter(directive)) {
        warn!(error = %e, level, "Failed to apply log level");
    }
}
