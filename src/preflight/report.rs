// ABOUTME: Summary of a preflight run that passed every stage.
// ABOUTME: Serializable for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::detect::{ContainerRuntimeKind, DistroFamily, InitSystemKind};

#[derive(Debug, Clone, Serialize)]
pub struct PreflightReport {
    /// Hostname of the machine that was checked.
    pub hostname: String,
    pub finished_at: DateTime<Utc>,
    pub distro: DistroFamily,
    pub init_system: InitSystemKind,
    pub runtime: ContainerRuntimeKind,
    pub ports_checked: usize,
    /// Sysctl drop-in that was written.
    pub sysctl_path: PathBuf,
}

impl PreflightReport {
    pub(crate) fn new(
        distro: DistroFamily,
        init_system: InitSystemKind,
        runtime: ContainerRuntimeKind,
        ports_checked: usize,
        sysctl_path: PathBuf,
    ) -> Self {
        Self {
            hostname: gethostname::gethostname().to_string_lossy().into_owned(),
            finished_at: Utc::now(),
            distro,
            init_system,
            runtime,
            ports_checked,
            sysctl_path,
        }
    }
}
