// ABOUTME: Compile-fail test verifying ports cannot be checked right after distro detection.
// ABOUTME: This test should fail to compile, validating state machine safety.

use kubeprep::preflight::{DistroChecked, HostProbes, Preflight};

async fn try_skip_c_library(preflight: Preflight<DistroChecked>, probes: &HostProbes<'_>) {
    // ERROR: check_ports() method doesn't exist on Preflight<DistroChecked>
    let _ = preflight.check_ports(probes).await;
}

fn main() {}
