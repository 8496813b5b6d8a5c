// ABOUTME: Preflight state types for the type state pattern.
// ABOUTME: Each state carries the classifications confirmed so far.

use crate::detect::{ContainerRuntimeKind, DistroFamily, InitSystemKind};

/// Nothing checked yet.
/// Available actions: `check_distro()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Start;

/// Distribution family known.
/// Available actions: `check_c_library()`
#[derive(Debug, Clone, Copy)]
pub struct DistroChecked {
    pub(crate) distro: DistroFamily,
}

/// C library confirmed installed.
/// Available actions: `check_ports()`
#[derive(Debug, Clone, Copy)]
pub struct CLibChecked {
    pub(crate) distro: DistroFamily,
}

/// Required ports in the expected state.
/// Available actions: `check_init()`
#[derive(Debug, Clone, Copy)]
pub struct PortsChecked {
    pub(crate) distro: DistroFamily,
    pub(crate) ports_checked: usize,
}

/// Init system known.
/// Available actions: `apply_sysctl()`
#[derive(Debug, Clone, Copy)]
pub struct InitChecked {
    pub(crate) distro: DistroFamily,
    pub(crate) ports_checked: usize,
    pub(crate) init: InitSystemKind,
}

/// IP forwarding written and applied.
/// Available actions: `check_runtime()`
#[derive(Debug, Clone, Copy)]
pub struct SysctlApplied {
    pub(crate) distro: DistroFamily,
    pub(crate) ports_checked: usize,
    pub(crate) init: InitSystemKind,
}

/// Container runtime known.
/// Available actions: `check_compatibility()`
#[derive(Debug, Clone, Copy)]
pub struct RuntimeChecked {
    pub(crate) distro: DistroFamily,
    pub(crate) ports_checked: usize,
    pub(crate) init: InitSystemKind,
    pub(crate) runtime: ContainerRuntimeKind,
}

/// Runtime and init system are a known-good pairing.
/// Available actions: `finish()`
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityChecked {
    pub(crate) distro: DistroFamily,
    pub(crate) ports_checked: usize,
    pub(crate) init: InitSystemKind,
    pub(crate) runtime: ContainerRuntimeKind,
}

macro_rules! distro_accessor {
    ($($state:ty),*) => {
        $(impl $state {
            pub fn distro(&self) -> DistroFamily {
                self.distro
            }
        })*
    };
}

distro_accessor!(
    DistroChecked,
    CLibChecked,
    PortsChecked,
    InitChecked,
    SysctlApplied,
    RuntimeChecked,
    CompatibilityChecked
);

impl InitChecked {
    pub fn init(&self) -> InitSystemKind {
        self.init
    }
}

impl RuntimeChecked {
    pub fn init(&self) -> InitSystemKind {
        self.init
    }

    pub fn runtime(&self) -> ContainerRuntimeKind {
        self.runtime
    }
}
