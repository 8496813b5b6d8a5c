// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use serde::Serialize;
use std::time::Instant;

use crate::preflight::{PreflightError, PreflightReport, Stage};

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Minimal output for CI (only final result)
    Quiet,
    /// JSON lines for scripting
    Json,
}

impl OutputMode {
    pub fn from_flags(quiet: bool, json: bool) -> Self {
        if json {
            OutputMode::Json
        } else if quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn duration(&self) -> Option<f64> {
        self.start_time.map(|_| self.elapsed_secs())
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Announce the start of a pipeline stage.
    pub fn stage(&self, stage: Stage) {
        match self.mode {
            OutputMode::Normal => println!("  → Running {}...", stage),
            OutputMode::Quiet => {}
            OutputMode::Json => emit(
                &JsonEvent {
                    event: "stage",
                    message: stage.description(),
                    stage: None,
                    duration_secs: self.duration(),
                    report: None,
                },
                false,
            ),
        }
    }

    /// Print the final success line, or the report as JSON.
    pub fn report(&self, report: &PreflightReport) {
        let message = format!(
            "Host {} is ready: {} with {} on {}",
            report.hostname, report.runtime, report.init_system, report.distro
        );
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({:.1}s)", elapsed);
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Quiet => println!("{message}"),
            OutputMode::Json => emit(
                &JsonEvent {
                    event: "success",
                    message: &message,
                    stage: None,
                    duration_secs: self.duration(),
                    report: Some(report),
                },
                false,
            ),
        }
    }

    /// Print a preflight failure.
    pub fn failure(&self, error: &PreflightError) {
        let message = format!("{} failed: {}", error.stage(), error);
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => eprintln!("Error: {message}"),
            OutputMode::Json => emit(
                &JsonEvent {
                    event: "error",
                    message: &message,
                    stage: Some(error.stage().description()),
                    duration_secs: self.duration(),
                    report: None,
                },
                true,
            ),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => emit(
                &JsonEvent {
                    event: "error",
                    message,
                    stage: None,
                    duration_secs: self.duration(),
                    report: None,
                },
                true,
            ),
        }
    }
}

fn emit(event: &JsonEvent<'_>, to_stderr: bool) {
    if let Ok(json) = serde_json::to_string(event) {
        if to_stderr {
            eprintln!("{json}");
        } else {
            println!("{json}");
        }
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    stage: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a PreflightReport>,
}
