//! Board-agnostic navigation health logic
//!
//! This crate contains the loss-of-navigation check that runs inside the
//! vehicle control loop, independent of any flight controller:
//!
//! - Collaborator traits (estimator, vehicle, reporter)
//! - Variance threshold evaluation
//! - Hysteresis counter and failure latch
//! - Failsafe state machine
//! - Configuration types and persistence

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod check;
pub mod config;
pub mod failsafe;
pub mod monitor;
pub mod traits;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use check::{over_threshold, VarianceSample};
pub use config::{ConfigError, MonitorConfig};
pub use failsafe::{FailsafeController, FailsafeState};
pub use monitor::{EkfCheck, NavStatus};
