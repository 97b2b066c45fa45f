//! Tracing/logging setup shared by anything embedding the order model.

/// Initialize process-wide tracing with the default configuration.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&tracing::TracingConfig::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, TracingConfig};
