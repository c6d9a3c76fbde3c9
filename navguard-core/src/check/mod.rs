//! Variance threshold evaluation
//!
//! Turns one tick's estimator variances into an over-threshold verdict.

pub mod threshold;
pub mod variance;

pub use threshold::{over_threshold, score};
pub use variance::{VarianceSample, Vector2, Vector3};
