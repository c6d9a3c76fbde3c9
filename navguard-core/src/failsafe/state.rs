//! Failsafe state definition

/// Failsafe states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FailsafeState {
    /// Navigation trusted, no failsafe action taken
    #[default]
    Off,
    /// Navigation failsafe engaged
    On,
}

/// Events that drive the failsafe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FailsafeEvent {
    /// Variances latched bad
    Engage,
    /// Variances recovered, or the check was disabled
    Clear,
}

impl FailsafeState {
    /// Check if the failsafe is engaged
    pub fn is_active(&self) -> bool {
        matches!(self, FailsafeState::On)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: FailsafeEvent) -> Self {
        use FailsafeEvent::*;
        use FailsafeState::*;

        match (self, event) {
            (Off, Engage) => On,
            (On, Clear) => Off,

            // Default: stay in current state
            _ => self,
        }
    }
}
