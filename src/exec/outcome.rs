// ABOUTME: Command line and outcome types for external command execution.
// ABOUTME: CommandOutcome separates missing, denied, failed, timed out and successful runs.

use nonempty::NonEmpty;
use std::fmt;
use std::time::Duration;

/// A program and its arguments. Never passed through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine(NonEmpty<String>);

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = NonEmpty::new(program.into());
        argv.extend(args.into_iter().map(Into::into));
        Self(argv)
    }

    /// Build from an argv vector; returns None when it is empty.
    pub fn from_vec(argv: Vec<String>) -> Option<Self> {
        NonEmpty::from_vec(argv).map(Self)
    }

    pub fn program(&self) -> &str {
        &self.0.head
    }

    pub fn args(&self) -> &[String] {
        &self.0.tail
    }
}

impl From<NonEmpty<String>> for CommandLine {
    fn from(argv: NonEmpty<String>) -> Self {
        Self(argv)
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.head)?;
        for arg in &self.0.tail {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Result of one external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The executable is not on the search path.
    NotFound,
    /// Spawning or talking to the process failed (permissions or other I/O fault).
    Denied { reason: String },
    /// The process ran and reported failure.
    Faulted {
        code: Option<i32>,
        signal: Option<i32>,
        stderr: String,
    },
    /// The process did not finish in time and was killed.
    TimedOut(Duration),
    /// The process exited zero.
    Succeeded { stdout: String, stderr: String },
}

impl CommandOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, CommandOutcome::Succeeded { .. })
    }

    /// Short summary without captured output, safe for default log levels.
    pub fn summary(&self) -> String {
        match self {
            CommandOutcome::NotFound => "executable not found".to_string(),
            CommandOutcome::Denied { reason } => format!("execution denied: {reason}"),
            CommandOutcome::Faulted {
                code: Some(code), ..
            } => format!("exited with code {code}"),
            CommandOutcome::Faulted {
                signal: Some(signal),
                ..
            } => format!("killed by signal {signal}"),
            CommandOutcome::Faulted { .. } => "exited abnormally".to_string(),
            CommandOutcome::TimedOut(timeout) => format!("timed out after {timeout:?}"),
            CommandOutcome::Succeeded { .. } => "succeeded".to_string(),
        }
    }
}
