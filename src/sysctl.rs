// ABOUTME: Enables kernel IP forwarding through a sysctl drop-in file.
// ABOUTME: The file write and the system-wide reload form one step.

use crate::exec::{CommandLine, CommandOutcome, CommandRunner};
use crate::host::write_text_file;
use std::path::{Path, PathBuf};

pub const SYSCTL_CONF_PATH: &str = "/etc/sysctl.d/k8s.conf";

/// Drop-in content. Terminated by a carriage return.
pub const IP_FORWARD_SETTING: &str = "net.ipv4.ip_forward = 1\r";

/// Reloads every sysctl configuration file.
pub fn default_apply_command() -> CommandLine {
    CommandLine::new("sysctl", ["--system"])
}

#[derive(Debug, thiserror::Error)]
pub enum SysctlError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("`{command}` failed: {summary}")]
    Apply { command: String, summary: String },
}

/// Writes the IP forwarding drop-in and applies it.
#[derive(Debug, Clone)]
pub struct SysctlWriter {
    path: PathBuf,
    apply_command: CommandLine,
}

impl SysctlWriter {
    pub fn new(path: impl Into<PathBuf>, apply_command: CommandLine) -> Self {
        Self {
            path: path.into(),
            apply_command,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the drop-in file, then reload sysctl settings.
    ///
    /// The reload only runs if the write succeeded.
    pub async fn enable_ip_forwarding(&self, runner: &dyn CommandRunner) -> Result<(), SysctlError> {
        write_text_file(&self.path, IP_FORWARD_SETTING)
            .await
            .map_err(|source| {
                tracing::error!("Writing {} failed: {}", self.path.display(), source);
                SysctlError::Write {
                    path: self.path.clone(),
                    source,
                }
            })?;

        match runner.run(&self.apply_command).await {
            CommandOutcome::Succeeded { .. } => Ok(()),
            outcome => Err(SysctlError::Apply {
                command: self.apply_command.to_string(),
                summary: outcome.summary(),
            }),
        }
    }
}

impl Default for SysctlWriter {
    fn default() -> Self {
        Self::new(SYSCTL_CONF_PATH, default_apply_command())
    }
}
