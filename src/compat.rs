// ABOUTME: Known-good pairings of container runtime and init system.
// ABOUTME: The table is plain data so it can be overridden from configuration.

use crate::detect::{ContainerRuntimeKind, InitSystemKind};
use serde::{Deserialize, Serialize};

/// A runtime and init system combination known to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub runtime: ContainerRuntimeKind,
    pub init: InitSystemKind,
}

impl Pairing {
    pub const fn new(runtime: ContainerRuntimeKind, init: InitSystemKind) -> Self {
        Self { runtime, init }
    }
}

/// Default known-good pairings.
pub const DEFAULT_PAIRINGS: [Pairing; 5] = [
    Pairing::new(ContainerRuntimeKind::Containerd, InitSystemKind::Systemd),
    Pairing::new(ContainerRuntimeKind::Containerd, InitSystemKind::CgroupOnly),
    Pairing::new(ContainerRuntimeKind::CriO, InitSystemKind::Systemd),
    Pairing::new(ContainerRuntimeKind::CriO, InitSystemKind::CgroupOnly),
    Pairing::new(ContainerRuntimeKind::DockerCompatible, InitSystemKind::Systemd),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibilityTable(Vec<Pairing>);

impl CompatibilityTable {
    pub fn new(pairings: Vec<Pairing>) -> Self {
        Self(pairings)
    }

    pub fn pairings(&self) -> &[Pairing] {
        &self.0
    }

    /// Whether the pair is listed. Unknown on either side is never compatible,
    /// even if a table lists it.
    pub fn is_compatible(&self, runtime: ContainerRuntimeKind, init: InitSystemKind) -> bool {
        if !runtime.is_known() || !init.is_known() {
            return false;
        }
        self.0.contains(&Pairing::new(runtime, init))
    }
}

impl Default for CompatibilityTable {
    fn default() -> Self {
        Self(DEFAULT_PAIRINGS.to_vec())
    }
}
