//! Persisted configuration envelope
//!
//! The config is stored in flash wrapped with a magic number, a format
//! version and a CRC so stale or corrupt data falls back to defaults
//! instead of arming with a bad threshold.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::types::MonitorConfig;

/// Magic number to identify stored check configuration
pub const CONFIG_MAGIC: u32 = 0x454B_4643; // "EKFC"

/// Current stored format version
pub const CONFIG_VERSION: u8 = 1;

/// Upper bound on the encoded envelope size
pub const MAX_STORED_SIZE: usize = 32;

/// Configuration as stored in flash
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoredConfig {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    /// Check configuration
    pub config: MonitorConfig,
    /// CRC32 over magic, version and config
    pub crc: u32,
}

impl StoredConfig {
    /// Wrap a config for storage
    pub fn new(config: MonitorConfig) -> Self {
        let mut stored = Self {
            magic: CONFIG_MAGIC,
            version: CONFIG_VERSION,
            config,
            crc: 0,
        };
        stored.crc = stored.calculate_crc();
        stored
    }

    /// Calculate CRC32 over everything except the crc field
    pub fn calculate_crc(&self) -> u32 {
        let mut crc: u32 = 0xFFFF_FFFF;
        crc = crc32_update(crc, &self.magic.to_le_bytes());
        crc = crc32_update(crc, &[self.version]);
        crc = crc32_update(crc, &self.config.threshold.to_bits().to_le_bytes());
        crc = crc32_update(crc, &[self.config.iterations]);
        crc = crc32_update(crc, &self.config.warning_interval_ms.to_le_bytes());
        !crc
    }

    /// Verify the CRC is correct
    pub fn verify_crc(&self) -> bool {
        self.crc == self.calculate_crc()
    }

    /// Encode into `buf`, returning the number of bytes written
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, ConfigError> {
        let used = postcard::to_slice(self, buf).map_err(|_| ConfigError::BufferTooSmall)?;
        Ok(used.len())
    }

    /// Decode and validate a stored config
    pub fn decode(bytes: &[u8]) -> Result<MonitorConfig, ConfigError> {
        let stored: StoredConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if stored.magic != CONFIG_MAGIC {
            return Err(ConfigError::BadMagic);
        }
        if stored.version != CONFIG_VERSION {
            warn!(
                "Config version mismatch: found {}, expected {}",
                stored.version,
                CONFIG_VERSION
            );
            return Err(ConfigError::VersionMismatch(stored.version));
        }
        if !stored.verify_crc() {
            return Err(ConfigError::CrcMismatch);
        }

        stored.config.validate()?;
        Ok(stored.config)
    }
}

/// CRC32 update (IEEE 802.3 polynomial, reflected)
fn crc32_update(crc: u32, data: &[u8]) -> u32 {
    const POLY: u32 = 0xEDB8_8320;
    let mut crc = crc;

    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ POLY } else { crc >> 1 };
        }
    }

    crc
}
