//! Tracing and logging setup shared by binaries and tests that embed the
//! allocation model.

/// Initialize process-wide tracing with the `info` fallback filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Initialize process-wide tracing, falling back to `default_directive` when
/// `RUST_LOG` is unset or invalid.
pub fn init_with_default(default_directive: &str) {
    tracing::init(default_directive);
}

/// Subscriber construction (filters, formatting).
pub mod tracing;
