//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default variance threshold
pub const DEFAULT_THRESHOLD: f32 = 0.8;

/// Default number of bad ticks before the failsafe latches (1 s at 10 Hz)
pub const DEFAULT_ITERATIONS: u8 = 10;

/// Minimum iteration count
///
/// The yaw reset and lane switch requests fire two and one ticks before
/// the latch, so the counter needs room below them.
pub const MIN_ITERATIONS: u8 = 7;

/// Default minimum interval between operator warnings
pub const DEFAULT_WARNING_INTERVAL_MS: u32 = 30_000;

/// EKF check configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    /// Variance threshold, zero or below disables the check
    pub threshold: f32,
    /// Consecutive bad ticks needed to latch
    pub iterations: u8,
    /// Minimum interval between operator warnings (ms)
    pub warning_interval_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            iterations: DEFAULT_ITERATIONS,
            warning_interval_ms: DEFAULT_WARNING_INTERVAL_MS,
        }
    }
}

impl MonitorConfig {
    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations < MIN_ITERATIONS {
            return Err(ConfigError::TooFewIterations(self.iterations));
        }
        if !self.threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold);
        }
        Ok(())
    }

    /// Check if the threshold enables the check
    pub fn is_enabled(&self) -> bool {
        self.threshold > 0.0
    }
}
