// ABOUTME: Host classification: distribution, C library, init system and container runtime.
// ABOUTME: Detectors convert every probe failure into an Unknown classification.

mod clib;
mod distro;
mod init;
mod runtime;
mod types;

pub use clib::{CLibraryError, c_library_query, has_c_library};
pub use distro::{debian_probe, detect_distro, redhat_probe};
pub use init::{INIT_CGROUP_FILE, SYSTEMD_RUNTIME_DIR, classify_cgroup, detect_init};
pub use runtime::{RUNTIME_MARKERS, detect_runtime};
pub use types::{ContainerRuntimeKind, DistroFamily, InitSystemKind};
