//! Telemetry module
//!
//! Logging setup for the binary

mod logging;

pub use logging::init_logging;

use crate::config::TelemetryConfig;

/// Guard held for the lifetime of the process
pub struct TelemetryGuard {
    _priv: (),
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.format)?;
    Ok(TelemetryGuard { _priv: () })
}
