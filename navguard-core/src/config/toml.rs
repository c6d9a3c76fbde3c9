//! TOML configuration loading
//!
//! Reads the `[ekf_check]` table from a vehicle config file. Other tables
//! belong to other subsystems and are ignored; missing keys keep their
//! defaults.
//!
//! ```toml
//! [ekf_check]
//! threshold = 0.8
//! iterations = 10
//! warning_interval_ms = 30000
//! ```

use serde::Deserialize;

use super::error::ConfigError;
use super::types::MonitorConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    ekf_check: MonitorConfig,
}

/// Parse TOML configuration into a validated `MonitorConfig`
pub fn parse_config(input: &str) -> Result<MonitorConfig, ConfigError> {
    let file: ConfigFile = ::toml::from_str(input).map_err(|_| {
        warn!("TOML parse error in ekf_check config");
        ConfigError::TomlParse
    })?;

    file.ekf_check.validate()?;
    debug!(
        "ekf_check config: threshold={}, iterations={}, warning_interval={}ms",
        file.ekf_check.threshold,
        file.ekf_check.iterations,
        file.ekf_check.warning_interval_ms
    );
    Ok(file.ekf_check)
}
