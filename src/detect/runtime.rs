// ABOUTME: Container runtime detection from well-known socket and state paths.
// ABOUTME: Checks containerd first, then CRI-O, then the cri-dockerd shim.

use super::types::ContainerRuntimeKind;
use crate::host::FileProbe;
use std::path::Path;

const CONTAINERD_PATH: &str = "/var/run/containerd";
const CRIO_PATH: &str = "/var/run/crio";
const CRI_DOCKERD_SOCKET: &str = "/var/run/cri-dockerd.sock";

/// Marker paths in detection priority order.
pub const RUNTIME_MARKERS: [(&str, ContainerRuntimeKind); 3] = [
    (CONTAINERD_PATH, ContainerRuntimeKind::Containerd),
    (CRIO_PATH, ContainerRuntimeKind::CriO),
    (CRI_DOCKERD_SOCKET, ContainerRuntimeKind::DockerCompatible),
];

/// Detect the container runtime installed on the local host.
///
/// Detection order:
/// 1. containerd (`/var/run/containerd`)
/// 2. CRI-O (`/var/run/crio`)
/// 3. cri-dockerd (`/var/run/cri-dockerd.sock`)
pub fn detect_runtime(files: &dyn FileProbe) -> ContainerRuntimeKind {
    tracing::info!("Checking container runtime");

    for (path, kind) in RUNTIME_MARKERS {
        if files.exists(Path::new(path)) {
            tracing::info!("Found {} at {}", kind, path);
            return kind;
        }
    }

    tracing::info!("No container runtime found");
    ContainerRuntimeKind::Unknown
}
