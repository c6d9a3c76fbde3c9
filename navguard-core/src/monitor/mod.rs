//! EKF variance monitoring
//!
//! Debounces per-tick verdicts into a latched bad-navigation flag and
//! drives the failsafe from its edges.

pub mod ekf_check;
pub mod status;

pub use ekf_check::EkfCheck;
pub use status::NavStatus;
