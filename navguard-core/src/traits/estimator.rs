//! Navigation estimator trait

use crate::check::VarianceSample;

/// Trait for the navigation state estimator (EKF or equivalent)
///
/// Reads are snapshot reads valid for the current tick only. The recovery
/// requests are fire-and-forget: the estimator decides whether it can act
/// on them and nothing is reported back.
pub trait NavEstimator {
    /// Check whether the estimator has a reference origin
    ///
    /// The origin is assumed never to become unset once established.
    fn has_origin(&self) -> bool;

    /// Sample the current variances
    fn variances(&self) -> VarianceSample;

    /// Ask the estimator to try a yaw reset
    fn request_yaw_reset(&mut self);

    /// Ask the estimator to check whether switching to another core/lane
    /// would resolve the bad variances
    fn request_lane_switch(&mut self);
}
