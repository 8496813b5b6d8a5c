// ABOUTME: Runs external commands on the local host with a bounded timeout.
// ABOUTME: Converts every spawn and wait fault into a CommandOutcome.

use super::outcome::{CommandLine, CommandOutcome};
use async_trait::async_trait;
use std::io;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

/// Default bound on a single command invocation.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(60);

/// Executes external programs.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command once and classify the result. Never retries.
    async fn run(&self, command: &CommandLine) -> CommandOutcome;
}

/// Runs commands as child processes of the current process.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Duration,
}

impl SystemRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn spawn_and_wait(&self, command: &CommandLine) -> io::Result<Output> {
        Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_TIMEOUT)
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, command: &CommandLine) -> CommandOutcome {
        tracing::info!(command = %command, "Running command");

        let outcome = match tokio::time::timeout(self.timeout, self.spawn_and_wait(command)).await
        {
            // Dropping the output future kills the child.
            Err(_) => CommandOutcome::TimedOut(self.timeout),
            Ok(Err(e)) => classify_spawn_error(&e),
            Ok(Ok(output)) => classify_output(output),
        };

        log_outcome(command, &outcome);
        outcome
    }
}

fn classify_spawn_error(error: &io::Error) -> CommandOutcome {
    match error.kind() {
        io::ErrorKind::NotFound => CommandOutcome::NotFound,
        _ => CommandOutcome::Denied {
            reason: error.to_string(),
        },
    }
}

fn classify_output(output: Output) -> CommandOutcome {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        return CommandOutcome::Succeeded { stdout, stderr };
    }

    CommandOutcome::Faulted {
        code: output.status.code(),
        signal: exit_signal(&output.status),
        stderr,
    }
}

#[cfg(unix)]
fn exit_signal(status: &std::process::ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &std::process::ExitStatus) -> Option<i32> {
    None
}

fn log_outcome(command: &CommandLine, outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Succeeded { stdout, stderr } => {
            tracing::info!(command = %command, "Command succeeded");
            tracing::debug!(command = %command, %stdout, %stderr, "Command output");
        }
        CommandOutcome::NotFound => {
            tracing::info!(command = %command, "Command not found");
        }
        CommandOutcome::Faulted { stderr, .. } => {
            tracing::error!(command = %command, outcome = %outcome.summary(), "Command failed");
            tracing::debug!(command = %command, %stderr, "Command stderr");
        }
        CommandOutcome::Denied { .. } | CommandOutcome::TimedOut(_) => {
            tracing::error!(command = %command, outcome = %outcome.summary(), "Command failed");
        }
    }
}
