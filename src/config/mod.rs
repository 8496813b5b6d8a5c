// ABOUTME: Configuration types and parsing for kubeprep.yml.
// ABOUTME: Every field has a default, so running without a file uses built-in behaviour.

mod deserialize;
mod ports;
mod sysctl;

pub use ports::{PortRange, PortsConfig};
pub use sysctl::SysctlConfig;

use crate::compat::CompatibilityTable;
use crate::error::{Error, Result};
use crate::exec::DEFAULT_COMMAND_TIMEOUT;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "kubeprep.yml";
pub const CONFIG_FILENAME_ALT: &str = "kubeprep.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".kubeprep/config.yml";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Address the port checks connect to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Upper bound on every external command.
    #[serde(default = "default_command_timeout", with = "humantime_serde")]
    pub command_timeout: Duration,

    #[serde(default)]
    pub ports: PortsConfig,

    #[serde(default)]
    pub sysctl: SysctlConfig,

    #[serde(default)]
    pub compatibility: CompatibilityTable,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_command_timeout() -> Duration {
    DEFAULT_COMMAND_TIMEOUT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: default_host(),
            command_timeout: default_command_timeout(),
            ports: PortsConfig::default(),
            sysctl: SysctlConfig::default(),
            compatibility: CompatibilityTable::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Load the first config file found in `dir`, or defaults if there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        tracing::debug!("No configuration file in {}, using defaults", dir.display());
        Ok(Config::default())
    }

    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::InvalidConfig("host cannot be empty".to_string()));
        }

        if self.command_timeout.is_zero() {
            return Err(Error::InvalidConfig(
                "command_timeout must be greater than zero".to_string(),
            ));
        }

        if self.ports.concurrency == 0 {
            return Err(Error::InvalidConfig(
                "ports.concurrency must be at least 1".to_string(),
            ));
        }

        if self.ports.timeout.is_zero() {
            return Err(Error::InvalidConfig(
                "ports.timeout must be greater than zero".to_string(),
            ));
        }

        if self.compatibility.pairings().is_empty() {
            return Err(Error::InvalidConfig(
                "compatibility table cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
