//! Loss-of-navigation failsafe
//!
//! Edge-triggered OFF/ON state machine. Each real transition performs its
//! side effects exactly once; repeated requests are ignored.

pub mod controller;
pub mod state;

pub use controller::FailsafeController;
pub use state::{FailsafeEvent, FailsafeState};
