//! Binary configuration blob
//!
//! A [`DisplayConfig`] can be kept in flash as postcard-serialized data and
//! read once at startup. The blob starts with a magic number and a format
//! version so stale or foreign data is rejected instead of misread.

use serde::{Deserialize, Serialize};

use super::types::{ConfigError, DisplayConfig};

/// Magic number to identify a display configuration blob
pub const CONFIG_MAGIC: u32 = 0x5453_4346; // "TSCF"

/// Current blob format version
pub const CONFIG_VERSION: u8 = 1;

/// Upper bound on the encoded size of a [`DisplayConfig`]
pub const MAX_CONFIG_BYTES: usize = 96;

#[derive(Serialize, Deserialize)]
struct StoredConfig {
    magic: u32,
    version: u8,
    config: DisplayConfig,
}

impl DisplayConfig {
    /// Encode into `buf`, returning the used prefix
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        let stored = StoredConfig {
            magic: CONFIG_MAGIC,
            version: CONFIG_VERSION,
            config: *self,
        };
        postcard::to_slice(&stored, buf).map_err(|e| match e {
            postcard::Error::SerializeBufferFull => ConfigError::TooLarge,
            _ => ConfigError::Serialize,
        })
    }

    /// Decode and validate a stored blob
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let stored: StoredConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if stored.magic != CONFIG_MAGIC || stored.version != CONFIG_VERSION {
            return Err(ConfigError::Deserialize);
        }

        stored.config.validate()?;
        Ok(stored.config)
    }
}
