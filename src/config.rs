use secrecy::SecretString;
use std::path::PathBuf;

use crate::error::{PluginError, Result};

/// Everything one plugin invocation needs: the array to poll and the state
/// file path mackerel-agent hands to every metrics plugin.
#[derive(Debug, Clone)]
pub struct Config {
    pub array: ArrayConfig,
    /// Accepted for agent compatibility. All metrics this plugin emits are
    /// gauges, so no state is ever read from or written to it.
    pub tempfile: Option<PathBuf>,
}

/// Connection settings for the array's ConfigurationManager API.
#[derive(Debug, Clone)]
pub struct ArrayConfig {
    /// API host, either `host` or `host:port`.
    pub host: String,
    pub user_id: String,
    pub password: SecretString,
}

impl Config {
    /// Reject values that would only fail later with a confusing transport
    /// error (a blank host turns into the URL `http:///...`).
    pub fn validate(&self) -> Result<()> {
        if self.array.host.trim().is_empty() {
            return Err(PluginError::Config("host must not be empty".to_string()));
        }
        Ok(())
    }
}
