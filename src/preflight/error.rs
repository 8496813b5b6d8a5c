// ABOUTME: Preflight error types with SNAFU pattern.
// ABOUTME: Every variant names the stage that stopped the pipeline.

use snafu::Snafu;
use std::fmt;

use crate::detect::{CLibraryError, ContainerRuntimeKind, DistroFamily, InitSystemKind};
use crate::ports::PortCheckError;
use crate::sysctl::SysctlError;

/// Pipeline stages in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Distro,
    CLibrary,
    Ports,
    InitSystem,
    Sysctl,
    Runtime,
    Compatibility,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::Distro,
        Stage::CLibrary,
        Stage::Ports,
        Stage::InitSystem,
        Stage::Sysctl,
        Stage::Runtime,
        Stage::Compatibility,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Stage::Distro => "OS distribution check",
            Stage::CLibrary => "C library check",
            Stage::Ports => "port check",
            Stage::InitSystem => "init system check",
            Stage::Sysctl => "IP forwarding setup",
            Stage::Runtime => "container runtime check",
            Stage::Compatibility => "runtime compatibility check",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A mandatory stage did not pass.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum PreflightError {
    #[snafu(display("unsupported distribution: neither apt-get nor dnf is usable"))]
    UnknownDistro,

    #[snafu(display("cannot query the C library: {source}"))]
    CLibraryQuery { source: CLibraryError },

    #[snafu(display("C library package is not installed on this {distro} host"))]
    CLibraryMissing { distro: DistroFamily },

    #[snafu(display("{source}"))]
    Ports { source: PortCheckError },

    #[snafu(display("init system could not be determined"))]
    UnknownInitSystem,

    #[snafu(display("enabling IP forwarding failed: {source}"))]
    Sysctl { source: SysctlError },

    #[snafu(display("no supported container runtime found"))]
    UnknownRuntime,

    #[snafu(display("container runtime {runtime} is not supported with init system {init}"))]
    Incompatible {
        runtime: ContainerRuntimeKind,
        init: InitSystemKind,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreflightErrorKind {
    /// A classification stayed Unknown, or a probe gave no verdict.
    Unclassified,
    /// A required package is not installed.
    MissingPackage,
    /// A required port is in the wrong state.
    PortConflict,
    /// The sysctl file could not be written.
    WriteFailed,
    /// An external command reported failure.
    CommandFailed,
    /// Detected components do not work together.
    Incompatible,
}

impl PreflightError {
    /// The stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            PreflightError::UnknownDistro => Stage::Distro,
            PreflightError::CLibraryQuery { .. } | PreflightError::CLibraryMissing { .. } => {
                Stage::CLibrary
            }
            PreflightError::Ports { .. } => Stage::Ports,
            PreflightError::UnknownInitSystem => Stage::InitSystem,
            PreflightError::Sysctl { .. } => Stage::Sysctl,
            PreflightError::UnknownRuntime => Stage::Runtime,
            PreflightError::Incompatible { .. } => Stage::Compatibility,
        }
    }

    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> PreflightErrorKind {
        match self {
            PreflightError::UnknownDistro
            | PreflightError::UnknownInitSystem
            | PreflightError::UnknownRuntime
            | PreflightError::CLibraryQuery { .. } => PreflightErrorKind::Unclassified,
            PreflightError::CLibraryMissing { .. } => PreflightErrorKind::MissingPackage,
            PreflightError::Ports {
                source: PortCheckError::Indeterminate { .. },
            } => PreflightErrorKind::Unclassified,
            PreflightError::Ports { .. } => PreflightErrorKind::PortConflict,
            PreflightError::Sysctl { source } => match source {
                SysctlError::Write { .. } => PreflightErrorKind::WriteFailed,
                SysctlError::Apply { .. } => PreflightErrorKind::CommandFailed,
            },
            PreflightError::Incompatible { .. } => PreflightErrorKind::Incompatible,
        }
    }

    /// The offending port, if this is a port failure.
    pub fn failed_port(&self) -> Option<u16> {
        match self {
            PreflightError::Ports { source } => Some(source.port()),
            _ => None,
        }
    }
}

impl From<PortCheckError> for PreflightError {
    fn from(source: PortCheckError) -> Self {
        PreflightError::Ports { source }
    }
}

impl From<SysctlError> for PreflightError {
    fn from(source: SysctlError) -> Self {
        PreflightError::Sysctl { source }
    }
}

impl From<CLibraryError> for PreflightError {
    fn from(source: CLibraryError) -> Self {
        PreflightError::CLibraryQuery { source }
    }
}
