//! Boot sequence configuration
//!
//! Tunable parameters for the controller's boot retry loop.  Values can be
//! loaded from JSON (provisioning) or stored in flash as postcard bytes.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Boot retry parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootConfig {
    /// Maximum number of status polls before giving up
    pub max_attempts: u32,
    /// Wait between consecutive polls (milliseconds)
    pub poll_interval_ms: u32,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            poll_interval_ms: 100,
        }
    }
}

impl BootConfig {
    /// Reject parameters that can never produce a successful boot.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_attempts == 0 {
            return Err(Error::Config("max_attempts must be at least 1"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("malformed boot config")?;
        config.validate().context("invalid boot config")?;
        Ok(config)
    }

    /// Encode as postcard bytes for flash storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        postcard::to_allocvec(self).map_err(|_| Error::Config("serialisation failed"))
    }

    /// Decode and validate a config previously written with [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let config: Self =
            postcard::from_bytes(bytes).map_err(|_| Error::Config("corrupt stored config"))?;
        config.validate()?;
        Ok(config)
    }
}
