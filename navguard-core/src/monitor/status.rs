//! Status snapshot for telemetry

/// Snapshot of the check, taken between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavStatus {
    /// Current hysteresis count
    pub fail_count: u8,
    /// Variances latched bad
    pub bad_variance: bool,
    /// Failsafe engaged
    pub failsafe_active: bool,
    /// Threshold in use, zero or below when disabled
    pub threshold: f32,
}

impl NavStatus {
    /// Check if navigation is currently trusted
    pub fn is_healthy(&self) -> bool {
        !self.bad_variance
    }

    /// Check if the variances are over threshold but not yet latched
    pub fn is_degrading(&self) -> bool {
        !self.bad_variance && self.fail_count > 0
    }
}
