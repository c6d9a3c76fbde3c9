//! EKF check implementation
//!
//! Runs once per control tick (10 Hz). A bad verdict raises the failure
//! count and a good one lowers it. The variances latch bad when the count
//! reaches the configured iteration limit and only unlatch once it has
//! drained back to zero.

use crate::check::over_threshold;
use crate::config::{ConfigError, MonitorConfig};
use crate::failsafe::FailsafeController;
use crate::traits::{ErrorEvent, NavEstimator, Reporter, Severity, Vehicle};

use super::status::NavStatus;

/// Operator warning text
pub const WARNING_TEXT: &str = "EKF variance";

/// EKF variance check with failure latch
///
/// Owns all of its state; the caller supplies the collaborators on each
/// tick and must not call `tick` reentrantly.
#[derive(Debug, Clone)]
pub struct EkfCheck {
    config: MonitorConfig,
    /// Ticks the variances have been out of tolerance
    fail_count: u8,
    /// Variances latched bad
    bad_variance: bool,
    /// Time of the last operator warning (ms)
    last_warning_ms: Option<u32>,
    failsafe: FailsafeController,
}

impl Default for EkfCheck {
    fn default() -> Self {
        Self::with_valid_config(MonitorConfig::default())
    }
}

impl EkfCheck {
    /// Create a new check
    ///
    /// Fails if the configuration does not validate.
    pub fn new(config: MonitorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: MonitorConfig) -> Self {
        Self {
            config,
            fail_count: 0,
            bad_variance: false,
            last_warning_ms: None,
            failsafe: FailsafeController::new(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Update the variance threshold
    ///
    /// Takes effect on the next tick. Zero or below disables the check,
    /// which resets it on that tick. A non-finite threshold is rejected
    /// and the current one kept.
    pub fn set_threshold(&mut self, threshold: f32) -> Result<(), ConfigError> {
        let config = MonitorConfig {
            threshold,
            ..self.config
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Get the current failure count
    pub fn fail_count(&self) -> u8 {
        self.fail_count
    }

    /// Check if the variances are latched bad
    pub fn is_bad_variance(&self) -> bool {
        self.bad_variance
    }

    /// Check if the failsafe is engaged
    pub fn is_failsafe_active(&self) -> bool {
        self.failsafe.is_active()
    }

    /// Snapshot for telemetry
    pub fn status(&self) -> NavStatus {
        NavStatus {
            fail_count: self.fail_count,
            bad_variance: self.bad_variance,
            failsafe_active: self.failsafe.is_active(),
            threshold: self.config.threshold,
        }
    }

    /// Run one check tick
    ///
    /// # Arguments
    /// - `now_ms`: Monotonic time in milliseconds (may wrap)
    pub fn tick<E, V, R>(&mut self, now_ms: u32, estimator: &mut E, vehicle: &mut V, reporter: &mut R)
    where
        E: NavEstimator,
        V: Vehicle,
        R: Reporter,
    {
        // Without an origin there is nothing to judge; the origin never
        // becomes unset once established
        if !estimator.has_origin() {
            return;
        }

        if !vehicle.is_armed() || vehicle.in_self_managed_mode() || !self.config.is_enabled() {
            self.reset(reporter);
            return;
        }

        let sample = estimator.variances();
        let over = over_threshold(&sample, vehicle.optical_flow_healthy(), self.config.threshold);
        trace!(
            "ekf_check: vel={} pos={} mag={} over={}",
            sample.velocity,
            sample.position,
            sample.mag.max_component(),
            over
        );

        self.apply_verdict(over, now_ms, estimator, vehicle, reporter);
    }

    /// Feed one verdict through the failure counter and latch
    ///
    /// `tick` calls this after evaluating the variances; it is public so a
    /// verdict computed elsewhere can drive the same latch.
    pub fn apply_verdict<E, V, R>(
        &mut self,
        over: bool,
        now_ms: u32,
        estimator: &mut E,
        vehicle: &mut V,
        reporter: &mut R,
    ) where
        E: NavEstimator,
        V: Vehicle,
        R: Reporter,
    {
        let max = self.config.iterations;

        if over {
            // Counter is frozen at max while latched
            if !self.bad_variance {
                self.fail_count = self.fail_count.saturating_add(1).min(max);

                if self.fail_count == max - 2 {
                    // Two ticks from the failsafe, a yaw reset may resolve it
                    debug!("ekf_check: requesting yaw reset");
                    estimator.request_yaw_reset();
                }
                if self.fail_count == max - 1 {
                    // One tick from the failsafe, try another lane
                    debug!("ekf_check: requesting lane switch");
                    estimator.request_lane_switch();
                }
                if self.fail_count == max {
                    self.latch(now_ms, vehicle, reporter);
                }
            }
        } else if self.fail_count > 0 {
            self.fail_count -= 1;

            if self.bad_variance && self.fail_count == 0 {
                self.bad_variance = false;
                info!("ekf_check: variance cleared");
                reporter.log_error(ErrorEvent::VARIANCE_CLEARED);
                self.failsafe.clear(reporter);
            }
        }

        reporter.set_nav_bad(self.bad_variance);
    }

    /// Force the check back to the healthy state
    ///
    /// Used whenever the check is inactive. Always clears the failsafe.
    pub fn reset<R: Reporter>(&mut self, reporter: &mut R) {
        if self.fail_count > 0 || self.bad_variance {
            debug!("ekf_check: inactive, resetting from count {}", self.fail_count);
        }

        self.fail_count = 0;
        self.bad_variance = false;
        reporter.set_nav_bad(false);
        self.failsafe.clear(reporter);
    }

    fn latch<V: Vehicle, R: Reporter>(&mut self, now_ms: u32, vehicle: &mut V, reporter: &mut R) {
        self.bad_variance = true;
        warn!("ekf_check: bad variance after {} ticks", self.fail_count);
        reporter.log_error(ErrorEvent::BAD_VARIANCE);

        if self.warning_due(now_ms) {
            reporter.send_text(Severity::Critical, WARNING_TEXT);
            self.last_warning_ms = Some(now_ms);
        }

        self.failsafe.engage(vehicle, reporter);
    }

    fn warning_due(&self, now_ms: u32) -> bool {
        match self.last_warning_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) > self.config.warning_interval_ms,
        }
    }
}
