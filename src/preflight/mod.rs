// ABOUTME: Preflight orchestration using the type state pattern.
// ABOUTME: Exports state markers, the Preflight struct and the full pipeline runner.

mod error;
mod pipeline;
mod report;
mod state;

pub use error::{PreflightError, PreflightErrorKind, Stage};
pub use pipeline::{HostProbes, Preflight, run_preflight};
pub use report::PreflightReport;
pub use state::{
    CLibChecked, CompatibilityChecked, DistroChecked, InitChecked, PortsChecked, RuntimeChecked,
    Start, SysctlApplied,
};
