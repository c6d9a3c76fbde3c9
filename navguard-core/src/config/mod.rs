//! Check configuration
//!
//! Configuration can be persisted to flash as a postcard envelope or
//! loaded from the `[ekf_check]` table of a TOML file.

pub mod error;
#[cfg(feature = "serde")]
pub mod persist;
#[cfg(feature = "toml")]
pub mod toml;
pub mod types;

pub use error::ConfigError;
#[cfg(feature = "serde")]
pub use persist::{StoredConfig, CONFIG_MAGIC, CONFIG_VERSION, MAX_STORED_SIZE};
#[cfg(feature = "toml")]
pub use self::toml::parse_config;
pub use types::*;
