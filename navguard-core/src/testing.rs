//! Recording fakes for the collaborator traits
//!
//! Available to this crate's tests and, with the `testing` feature, to
//! downstream crates that want to drive the check on the host. Recording
//! past capacity panics so a long run never reports short counts.

use heapless::{String, Vec};

use crate::check::VarianceSample;
use crate::traits::{ErrorEvent, FlightMode, ModeReason, NavEstimator, Reporter, Severity, Vehicle};

/// Maximum recorded entries per fake
pub const RECORD_CAPACITY: usize = 256;

/// Maximum operator text length (matches a MAVLink STATUSTEXT payload)
pub const MAX_TEXT_LEN: usize = 50;

/// Estimator fake returning a settable sample
#[derive(Debug, Clone)]
pub struct MockEstimator {
    pub origin: bool,
    pub sample: VarianceSample,
    pub yaw_resets: u32,
    pub lane_switches: u32,
}

impl MockEstimator {
    /// Estimator with an origin and all variances zero
    pub fn new() -> Self {
        Self {
            origin: true,
            sample: VarianceSample::default(),
            yaw_resets: 0,
            lane_switches: 0,
        }
    }
}

impl Default for MockEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl NavEstimator for MockEstimator {
    fn has_origin(&self) -> bool {
        self.origin
    }

    fn variances(&self) -> VarianceSample {
        self.sample
    }

    fn request_yaw_reset(&mut self) {
        self.yaw_resets += 1;
    }

    fn request_lane_switch(&mut self) {
        self.lane_switches += 1;
    }
}

/// Vehicle fake recording mode change requests
#[derive(Debug, Clone, Default)]
pub struct MockVehicle {
    pub armed: bool,
    pub self_managed: bool,
    pub position_control: bool,
    pub auto: bool,
    pub optflow_healthy: bool,
    /// Reject every mode change request
    pub reject_modes: bool,
    pub mode_requests: Vec<(FlightMode, ModeReason), RECORD_CAPACITY>,
}

impl MockVehicle {
    /// Armed vehicle in a plain fixed-wing mode
    pub fn armed() -> Self {
        Self {
            armed: true,
            ..Self::default()
        }
    }
}

impl Vehicle for MockVehicle {
    fn is_armed(&self) -> bool {
        self.armed
    }

    fn in_self_managed_mode(&self) -> bool {
        self.self_managed
    }

    fn requires_position_control(&self) -> bool {
        self.position_control
    }

    fn in_auto_mode(&self) -> bool {
        self.auto
    }

    fn optical_flow_healthy(&self) -> bool {
        self.optflow_healthy
    }

    fn set_mode(&mut self, mode: FlightMode, reason: ModeReason) -> bool {
        self.mode_requests
            .push((mode, reason))
            .expect("recorder capacity");
        !self.reject_modes
    }
}

/// Reporter fake recording every output
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub events: Vec<ErrorEvent, RECORD_CAPACITY>,
    pub texts: Vec<(Severity, String<MAX_TEXT_LEN>), RECORD_CAPACITY>,
    /// Last published navigation-bad flag, None until first publish
    pub nav_bad: Option<bool>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `event` was logged
    pub fn count(&self, event: ErrorEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

impl Reporter for RecordingReporter {
    fn log_error(&mut self, event: ErrorEvent) {
        self.events.push(event).expect("recorder capacity");
    }

    fn send_text(&mut self, severity: Severity, text: &str) {
        let mut s = String::new();
        s.push_str(text).expect("text longer than MAX_TEXT_LEN");
        self.texts.push((severity, s)).expect("recorder capacity");
    }

    fn set_nav_bad(&mut self, bad: bool) {
        self.nav_bad = Some(bad);
    }
}
