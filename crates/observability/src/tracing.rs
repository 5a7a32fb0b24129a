//! Tracing/logging initialization.
//!
//! `RUST_LOG` is the only configuration knob: it takes the usual
//! `tracing-subscriber` directives, e.g. `stockalloc_allocation=debug`.

use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, or from `default_directive` when the
/// variable is missing or cannot be parsed.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the JSON subscriber for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_directive: &str) {
    // JSON logs + timestamps; allocation decisions are emitted as structured fields.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_harmless() {
        init("warn");
        init("debug");
    }

    #[test]
    fn fallback_directive_is_used_without_rust_log() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(env_filter("warn").to_string().contains("warn"));
        }
    }
}
