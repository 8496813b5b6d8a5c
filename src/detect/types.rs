// ABOUTME: Host classification types produced by the detectors.
// ABOUTME: Every classification has an Unknown variant that is the default.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Packaging ecosystem of the host operating system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistroFamily {
    Debian,
    RedHat,
    #[default]
    Unknown,
}

impl DistroFamily {
    pub fn is_known(&self) -> bool {
        !matches!(self, DistroFamily::Unknown)
    }
}

impl fmt::Display for DistroFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistroFamily::Debian => write!(f, "debian"),
            DistroFamily::RedHat => write!(f, "redhat"),
            DistroFamily::Unknown => write!(f, "unknown"),
        }
    }
}

/// Supervisor running as process 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InitSystemKind {
    #[serde(rename = "systemd")]
    Systemd,
    /// Plain cgroup hierarchy without systemd managing it.
    #[serde(rename = "cgroupfs")]
    CgroupOnly,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl InitSystemKind {
    pub fn is_known(&self) -> bool {
        !matches!(self, InitSystemKind::Unknown)
    }
}

impl fmt::Display for InitSystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitSystemKind::Systemd => write!(f, "systemd"),
            InitSystemKind::CgroupOnly => write!(f, "cgroupfs"),
            InitSystemKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Low-level container runtime installed on the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerRuntimeKind {
    #[serde(rename = "containerd")]
    Containerd,
    #[serde(rename = "cri-o")]
    CriO,
    /// Docker Engine behind the cri-dockerd shim.
    #[serde(rename = "cri-dockerd")]
    DockerCompatible,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl ContainerRuntimeKind {
    pub fn is_known(&self) -> bool {
        !matches!(self, ContainerRuntimeKind::Unknown)
    }
}

impl fmt::Display for ContainerRuntimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerRuntimeKind::Containerd => write!(f, "containerd"),
            ContainerRuntimeKind::CriO => write!(f, "cri-o"),
            ContainerRuntimeKind::DockerCompatible => write!(f, "cri-dockerd"),
            ContainerRuntimeKind::Unknown => write!(f, "unknown"),
        }
    }
}
