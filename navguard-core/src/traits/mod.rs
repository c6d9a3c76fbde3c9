//! Collaborator traits
//!
//! These traits define the interface between the navigation check and
//! the rest of the flight stack. The check never reaches past them.

pub mod estimator;
pub mod reporter;
pub mod vehicle;

pub use estimator::NavEstimator;
pub use reporter::{ErrorEvent, LogErrorCode, LogSubsystem, Reporter, Severity};
pub use vehicle::{FlightMode, ModeReason, Vehicle};
