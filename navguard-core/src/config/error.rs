//! Configuration errors

use core::fmt;

/// Errors from validating, loading or storing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Iteration count below the minimum needed for the recovery steps
    TooFewIterations(u8),
    /// Threshold is NaN or infinite
    InvalidThreshold,
    /// Stored bytes could not be decoded
    Deserialize,
    /// Output buffer too small for encoding
    BufferTooSmall,
    /// Stored data does not carry the config magic number
    BadMagic,
    /// Stored data was written by an incompatible version
    VersionMismatch(u8),
    /// Stored data is corrupt
    CrcMismatch,
    /// TOML text could not be parsed
    TomlParse,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooFewIterations(n) => {
                write!(f, "iterations must be at least 7, got {}", n)
            }
            ConfigError::InvalidThreshold => write!(f, "threshold must be a finite number"),
            ConfigError::Deserialize => write!(f, "stored config could not be decoded"),
            ConfigError::BufferTooSmall => write!(f, "buffer too small for config"),
            ConfigError::BadMagic => write!(f, "stored data is not a config"),
            ConfigError::VersionMismatch(v) => write!(f, "unsupported config version {}", v),
            ConfigError::CrcMismatch => write!(f, "stored config checksum mismatch"),
            ConfigError::TomlParse => write!(f, "invalid TOML config"),
        }
    }
}
