// ABOUTME: External command execution with a tagged outcome per invocation.
// ABOUTME: Exposes the CommandRunner seam and the local process implementation.

mod outcome;
mod runner;

pub use outcome::{CommandLine, CommandOutcome};
pub use runner::{CommandRunner, DEFAULT_COMMAND_TIMEOUT, SystemRunner};
