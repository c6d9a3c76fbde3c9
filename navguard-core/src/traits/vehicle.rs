//! Vehicle state and flight mode control

/// Flight modes the navigation failsafe can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlightMode {
    /// VTOL land in place
    VtolLand,
    /// VTOL hover, pilot keeps stick control
    VtolHover,
}

/// Reason attached to a mode change request
///
/// Downstream logging uses this to audit why the mode changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeReason {
    /// Loss of navigation (EKF) failsafe
    EkfFailsafe,
}

/// Trait for the arming and flight mode subsystem
pub trait Vehicle {
    /// Check if the motors are armed
    fn is_armed(&self) -> bool;

    /// Check if the current mode manages its own position/velocity checks
    ///
    /// The navigation check is bypassed entirely while this is true.
    fn in_self_managed_mode(&self) -> bool;

    /// Check if the current mode relies on estimator position/velocity
    ///
    /// Only these modes need a mode change when the failsafe engages.
    fn requires_position_control(&self) -> bool;

    /// Check if the vehicle is flying autonomously (no stick control)
    fn in_auto_mode(&self) -> bool;

    /// Check if an optical flow sensor is fitted and healthy
    ///
    /// Vehicles without optical flow keep the default.
    fn optical_flow_healthy(&self) -> bool {
        false
    }

    /// Request a flight mode change
    ///
    /// Returns false if the mode subsystem rejected the change.
    fn set_mode(&mut self, mode: FlightMode, reason: ModeReason) -> bool;
}
