// ABOUTME: Preflight struct and its state transitions.
// ABOUTME: Each transition consumes self and returns the next state or the failing stage.

use crate::config::Config;
use crate::detect::{self, ContainerRuntimeKind, DistroFamily, InitSystemKind};
use crate::exec::CommandRunner;
use crate::host::FileProbe;
use crate::ports::{self, PortProbe};

use super::error::{PreflightError, Stage};
use super::report::PreflightReport;
use super::state::{
    CLibChecked, CompatibilityChecked, DistroChecked, InitChecked, PortsChecked, RuntimeChecked,
    Start, SysctlApplied,
};

/// Access to the host under inspection.
#[derive(Clone, Copy)]
pub struct HostProbes<'a> {
    pub commands: &'a dyn CommandRunner,
    pub files: &'a dyn FileProbe,
    pub ports: &'a dyn PortProbe,
}

/// A preflight run in progress, parameterized by its current state.
#[derive(Debug)]
pub struct Preflight<S> {
    pub(crate) config: Config,
    pub(crate) state: S,
}

impl<S> Preflight<S> {
    pub fn state(&self) -> &S {
        &self.state
    }

    fn transition<T>(self, state: T) -> Preflight<T> {
        Preflight {
            config: self.config,
            state,
        }
    }
}

// =============================================================================
// Start -> DistroChecked
// =============================================================================

impl Preflight<Start> {
    pub fn new(config: Config) -> Self {
        Preflight {
            config,
            state: Start,
        }
    }

    /// Classify the distribution family. Unknown stops the pipeline.
    #[must_use = "preflight state must be used"]
    pub async fn check_distro(
        self,
        probes: &HostProbes<'_>,
    ) -> Result<Preflight<DistroChecked>, PreflightError> {
        match detect::detect_distro(probes.commands).await {
            DistroFamily::Unknown => Err(PreflightError::UnknownDistro),
            distro => {
                tracing::info!("Distribution family is {}", distro);
                Ok(self.transition(DistroChecked { distro }))
            }
        }
    }
}

// =============================================================================
// DistroChecked -> CLibChecked
// =============================================================================

impl Preflight<DistroChecked> {
    /// Confirm the C library package is installed.
    #[must_use = "preflight state must be used"]
    pub async fn check_c_library(
        self,
        probes: &HostProbes<'_>,
    ) -> Result<Preflight<CLibChecked>, PreflightError> {
        let distro = self.state.distro;
        if !detect::has_c_library(probes.commands, distro).await? {
            return Err(PreflightError::CLibraryMissing { distro });
        }
        Ok(self.transition(CLibChecked { distro }))
    }
}

// =============================================================================
// CLibChecked -> PortsChecked
// =============================================================================

impl Preflight<CLibChecked> {
    /// Check every required port against the configured policy.
    #[must_use = "preflight state must be used"]
    pub async fn check_ports(
        self,
        probes: &HostProbes<'_>,
    ) -> Result<Preflight<PortsChecked>, PreflightError> {
        let scan = self.config.ports.scan(&self.config.host);
        let ports_checked = ports::check_ports(probes.ports, &scan).await?;
        let distro = self.state.distro;
        Ok(self.transition(PortsChecked {
            distro,
            ports_checked,
        }))
    }
}

// =============================================================================
// PortsChecked -> InitChecked
// =============================================================================

impl Preflight<PortsChecked> {
    /// Classify the init system. Unknown stops the pipeline.
    #[must_use = "preflight state must be used"]
    pub fn check_init(
        self,
        probes: &HostProbes<'_>,
    ) -> Result<Preflight<InitChecked>, PreflightError> {
        let init = detect::detect_init(probes.files);
        if init == InitSystemKind::Unknown {
            return Err(PreflightError::UnknownInitSystem);
        }
        let PortsChecked {
            distro,
            ports_checked,
        } = self.state;
        Ok(self.transition(InitChecked {
            distro,
            ports_checked,
            init,
        }))
    }
}

// =============================================================================
// InitChecked -> SysctlApplied
// =============================================================================

impl Preflight<InitChecked> {
    /// Write the IP forwarding drop-in and apply it.
    #[must_use = "preflight state must be used"]
    pub async fn apply_sysctl(
        self,
        probes: &HostProbes<'_>,
    ) -> Result<Preflight<SysctlApplied>, PreflightError> {
        self.config
            .sysctl
            .writer()
            .enable_ip_forwarding(probes.commands)
            .await?;
        let InitChecked {
            distro,
            ports_checked,
            init,
        } = self.state;
        Ok(self.transition(SysctlApplied {
            distro,
            ports_checked,
            init,
        }))
    }
}

// =============================================================================
// SysctlApplied -> RuntimeChecked
// =============================================================================

impl Preflight<SysctlApplied> {
    /// Classify the container runtime. Unknown stops the pipeline.
    #[must_use = "preflight state must be used"]
    pub fn check_runtime(
        self,
        probes: &HostProbes<'_>,
    ) -> Result<Preflight<RuntimeChecked>, PreflightError> {
        let runtime = detect::detect_runtime(probes.files);
        if runtime == ContainerRuntimeKind::Unknown {
            return Err(PreflightError::UnknownRuntime);
        }
        let SysctlApplied {
            distro,
            ports_checked,
            init,
        } = self.state;
        Ok(self.transition(RuntimeChecked {
            distro,
            ports_checked,
            init,
            runtime,
        }))
    }
}

// =============================================================================
// RuntimeChecked -> CompatibilityChecked
// =============================================================================

impl Preflight<RuntimeChecked> {
    /// Look up the detected runtime and init system in the compatibility table.
    #[must_use = "preflight state must be used"]
    pub fn check_compatibility(self) -> Result<Preflight<CompatibilityChecked>, PreflightError> {
        let RuntimeChecked {
            distro,
            ports_checked,
            init,
            runtime,
        } = self.state;

        if !self.config.compatibility.is_compatible(runtime, init) {
            return Err(PreflightError::Incompatible { runtime, init });
        }

        Ok(self.transition(CompatibilityChecked {
            distro,
            ports_checked,
            init,
            runtime,
        }))
    }
}

// =============================================================================
// CompatibilityChecked -> Done
// =============================================================================

impl Preflight<CompatibilityChecked> {
    /// Finish the run and produce its report.
    pub fn finish(self) -> PreflightReport {
        let CompatibilityChecked {
            distro,
            ports_checked,
            init,
            runtime,
        } = self.state;
        PreflightReport::new(
            distro,
            init,
            runtime,
            ports_checked,
            self.config.sysctl.path,
        )
    }
}

/// Run every stage in order, stopping at the first failure.
///
/// `on_stage` is called as each stage begins. A failure is logged at critical
/// severity before it is returned.
pub async fn run_preflight(
    config: Config,
    probes: HostProbes<'_>,
    mut on_stage: impl FnMut(Stage),
) -> Result<PreflightReport, PreflightError> {
    tracing::info!("Kubernetes preflight started");

    let result: Result<PreflightReport, PreflightError> = async {
        on_stage(Stage::Distro);
        let preflight = Preflight::new(config).check_distro(&probes).await?;

        on_stage(Stage::CLibrary);
        let preflight = preflight.check_c_library(&probes).await?;

        on_stage(Stage::Ports);
        let preflight = preflight.check_ports(&probes).await?;

        on_stage(Stage::InitSystem);
        let preflight = preflight.check_init(&probes)?;

        on_stage(Stage::Sysctl);
        let preflight = preflight.apply_sysctl(&probes).await?;

        on_stage(Stage::Runtime);
        let preflight = preflight.check_runtime(&probes)?;

        on_stage(Stage::Compatibility);
        let preflight = preflight.check_compatibility()?;

        Ok::<_, PreflightError>(preflight.finish())
    }
    .await;

    match &result {
        Ok(_) => tracing::info!("Kubernetes preflight finished successfully"),
        Err(e) => tracing::error!(
            severity = "critical",
            stage = %e.stage(),
            "Kubernetes preflight failed at {}: {}",
            e.stage(),
            e
        ),
    }

    result
}
