//! Over-threshold verdict
//!
//! Two of compass, velocity and position over the threshold trips the
//! check. Velocity at twice the threshold counts double unless optical flow
//! is healthy enough to cross-check it.

use super::variance::VarianceSample;

/// Weighted count of magnetometer and velocity channels over threshold
///
/// The velocity branches are mutually exclusive: the doubled weight
/// applies only without healthy optical flow, otherwise velocity counts
/// once at `threshold`.
pub fn score(sample: &VarianceSample, optflow_healthy: bool, threshold: f32) -> u8 {
    let mut count = 0u8;

    if sample.mag.max_component() >= threshold {
        count += 1;
    }

    if !optflow_healthy && sample.velocity >= 2.0 * threshold {
        count += 2;
    } else if sample.velocity >= threshold {
        count += 1;
    }

    count
}

/// Check whether the sample is over the configured threshold
///
/// A threshold of zero, below zero or NaN disables the check.
pub fn over_threshold(sample: &VarianceSample, optflow_healthy: bool, threshold: f32) -> bool {
    if threshold.is_nan() || threshold <= 0.0 {
        return false;
    }

    let count = score(sample, optflow_healthy, threshold);
    (sample.position >= threshold && count >= 1) || count >= 2
}
