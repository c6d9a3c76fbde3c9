//! Flight log, ground station and notification outputs

/// Flight log subsystem identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LogSubsystem {
    /// Variance check
    EkfCheck = 16,
    /// Loss of navigation failsafe
    FailsafeEkfInav = 17,
}

/// Flight log error codes
///
/// Codes are scoped by subsystem, so different variants share values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogErrorCode {
    /// Variances stayed over threshold long enough to latch
    BadVariance,
    /// Latched variances recovered
    VarianceCleared,
    /// Failsafe engaged
    FailsafeOccurred,
    /// Failsafe cleared
    FailsafeResolved,
}

impl LogErrorCode {
    /// Raw code as written to the flight log
    pub const fn as_u8(self) -> u8 {
        match self {
            LogErrorCode::BadVariance => 2,
            LogErrorCode::VarianceCleared => 0,
            LogErrorCode::FailsafeOccurred => 1,
            LogErrorCode::FailsafeResolved => 0,
        }
    }
}

/// A structured flight log error event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ErrorEvent {
    pub subsystem: LogSubsystem,
    pub code: LogErrorCode,
}

impl ErrorEvent {
    pub const BAD_VARIANCE: Self = Self::new(LogSubsystem::EkfCheck, LogErrorCode::BadVariance);
    pub const VARIANCE_CLEARED: Self =
        Self::new(LogSubsystem::EkfCheck, LogErrorCode::VarianceCleared);
    pub const FAILSAFE_OCCURRED: Self =
        Self::new(LogSubsystem::FailsafeEkfInav, LogErrorCode::FailsafeOccurred);
    pub const FAILSAFE_RESOLVED: Self =
        Self::new(LogSubsystem::FailsafeEkfInav, LogErrorCode::FailsafeResolved);

    pub const fn new(subsystem: LogSubsystem, code: LogErrorCode) -> Self {
        Self { subsystem, code }
    }

    /// Raw (subsystem, code) pair as written to the flight log
    pub const fn as_raw(self) -> (u8, u8) {
        (self.subsystem as u8, self.code.as_u8())
    }
}

/// Operator message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Severity {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

/// Trait for everything the check reports outward
pub trait Reporter {
    /// Write a structured event to the flight log
    fn log_error(&mut self, event: ErrorEvent);

    /// Send a text message to the operator
    fn send_text(&mut self, severity: Severity, text: &str);

    /// Publish the navigation-bad flag for status displays
    fn set_nav_bad(&mut self, bad: bool);
}
