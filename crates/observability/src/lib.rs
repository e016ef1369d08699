//! Tracing and logging (shared setup).

/// Environment-driven logging configuration.
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&ObservabilityConfig::from_env());
}

/// Initialize process-wide logging from an explicit config.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init_with(config);
}
