// ABOUTME: C library presence check through the distro's package database.
// ABOUTME: Unknown distributions are rejected rather than guessed.

use super::types::DistroFamily;
use crate::exec::{CommandLine, CommandRunner};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CLibraryError {
    #[error("no package query is defined for an unknown distribution")]
    UnsupportedDistro,
}

/// Package query confirming the C library is installed, if the family has one.
pub fn c_library_query(distro: DistroFamily) -> Option<CommandLine> {
    match distro {
        DistroFamily::Debian => Some(CommandLine::new("dpkg", ["-s", "libc6"])),
        DistroFamily::RedHat => Some(CommandLine::new("rpm", ["-qi", "glibc"])),
        DistroFamily::Unknown => None,
    }
}

/// Whether the package database reports the C library as installed.
pub async fn has_c_library(
    runner: &dyn CommandRunner,
    distro: DistroFamily,
) -> Result<bool, CLibraryError> {
    let query = c_library_query(distro).ok_or(CLibraryError::UnsupportedDistro)?;
    tracing::info!(%distro, "Checking C library package");
    Ok(runner.run(&query).await.succeeded())
}
