//! `recordshop-observability` — tracing/logging setup.
//!
//! The data-access clients only emit `tracing` events; whoever hosts them
//! (a binary, or the integration-test harness) calls [`init`] once at
//! startup to get JSON logs out of them.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging with the `info` fallback filter.
///
/// Safe to call multiple times; subsequent calls are no-ops, so every
/// integration test can call it without coordinating.
pub fn init() {
    init_with("info");
}

/// Initialize logging with an explicit fallback filter.
///
/// `RUST_LOG` still wins when set, so a deployment can tighten or loosen
/// logging without a rebuild.
pub fn init_with(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        super::init_with("debug");
    }
}
