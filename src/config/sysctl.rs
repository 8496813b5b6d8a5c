// ABOUTME: Sysctl drop-in configuration.
// ABOUTME: Defines the target file and the command that applies it.

use super::deserialize::deserialize_command;
use crate::exec::CommandLine;
use crate::sysctl::{SYSCTL_CONF_PATH, SysctlWriter, default_apply_command};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SysctlConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,

    #[serde(
        default = "default_apply_command",
        deserialize_with = "deserialize_command"
    )]
    pub apply_command: CommandLine,
}

fn default_path() -> PathBuf {
    PathBuf::from(SYSCTL_CONF_PATH)
}

impl Default for SysctlConfig {
    fn default() -> Self {
        SysctlConfig {
            path: default_path(),
            apply_command: default_apply_command(),
        }
    }
}

impl SysctlConfig {
    pub fn writer(&self) -> SysctlWriter {
        SysctlWriter::new(self.path.clone(), self.apply_command.clone())
    }
}
