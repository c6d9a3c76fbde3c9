//! Failsafe controller
//!
//! Applies the side effects of failsafe transitions: flight log events on
//! both edges, and a mode change on engage when the current mode depends
//! on estimator position.

use super::state::{FailsafeEvent, FailsafeState};
use crate::traits::{ErrorEvent, FlightMode, ModeReason, Reporter, Vehicle};

/// Failsafe controller
#[derive(Debug, Clone, Default)]
pub struct FailsafeController {
    state: FailsafeState,
}

impl FailsafeController {
    /// Create a controller in the `Off` state
    pub const fn new() -> Self {
        Self {
            state: FailsafeState::Off,
        }
    }

    /// Get current state
    pub fn state(&self) -> FailsafeState {
        self.state
    }

    /// Check if the failsafe is engaged
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Engage the failsafe
    ///
    /// No-op if already engaged. Returns true if this call engaged it.
    pub fn engage<V: Vehicle, R: Reporter>(&mut self, vehicle: &mut V, reporter: &mut R) -> bool {
        if !self.step(FailsafeEvent::Engage) {
            return false;
        }

        warn!("EKF failsafe occurred");
        reporter.log_error(ErrorEvent::FAILSAFE_OCCURRED);

        // Modes that do not use estimator position need no intervention
        if !vehicle.requires_position_control() {
            return true;
        }

        let mode = if vehicle.in_auto_mode() {
            // Pilot is not on the sticks, land
            FlightMode::VtolLand
        } else {
            // Pilot is on the sticks, hold a hover and let them fly
            FlightMode::VtolHover
        };

        if !vehicle.set_mode(mode, ModeReason::EkfFailsafe) {
            // Not retried; the mode subsystem owns its own fallback
            error!("EKF failsafe mode change to {:?} rejected", mode);
        }

        true
    }

    /// Clear the failsafe
    ///
    /// No-op if not engaged. Never changes flight mode. Returns true if
    /// this call cleared it.
    pub fn clear<R: Reporter>(&mut self, reporter: &mut R) -> bool {
        if !self.step(FailsafeEvent::Clear) {
            return false;
        }

        info!("EKF failsafe resolved");
        reporter.log_error(ErrorEvent::FAILSAFE_RESOLVED);
        true
    }

    /// Apply an event, returning true if the state changed
    fn step(&mut self, event: FailsafeEvent) -> bool {
        let next = self.state.transition(event);
        let changed = next != self.state;
        self.state = next;
        changed
    }
}
