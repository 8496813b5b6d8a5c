// ABOUTME: Distribution family detection via package-manager probes.
// ABOUTME: Checks apt-get first, then dnf; Debian wins if both are present.

use super::types::DistroFamily;
use crate::exec::{CommandLine, CommandRunner};

/// Debian-family package manager version probe.
pub fn debian_probe() -> CommandLine {
    CommandLine::new("apt-get", ["--version"])
}

/// RedHat-family package manager version probe.
pub fn redhat_probe() -> CommandLine {
    CommandLine::new("dnf", ["--version"])
}

/// Classify the host's distribution family.
///
/// Detection order:
/// 1. `apt-get --version` succeeds: Debian
/// 2. `dnf --version` succeeds: RedHat
/// 3. otherwise Unknown
pub async fn detect_distro(runner: &dyn CommandRunner) -> DistroFamily {
    tracing::info!("Checking distribution");

    if runner.run(&debian_probe()).await.succeeded() {
        return DistroFamily::Debian;
    }

    if runner.run(&redhat_probe()).await.succeeded() {
        return DistroFamily::RedHat;
    }

    tracing::info!("Neither apt-get nor dnf could be executed");
    DistroFamily::Unknown
}
