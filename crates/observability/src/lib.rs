//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide logging; `default_directive` applies when
/// `RUST_LOG` is unset.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init_with_default(default_directive: &str) {
    tracing::init(default_directive);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
