// ABOUTME: Init system detection from systemd markers and process 1's cgroups.
// ABOUTME: Unreadable or unrecognised cgroup data classifies as Unknown.

use super::types::InitSystemKind;
use crate::host::{FileProbe, read_text_file};
use std::path::Path;

/// Directory systemd creates at boot when it is the running init.
pub const SYSTEMD_RUNTIME_DIR: &str = "/run/systemd/system";

/// Control-group membership of process 1.
pub const INIT_CGROUP_FILE: &str = "/proc/1/cgroup";

/// Substrings in a cgroup entry that indicate systemd manages the hierarchy.
const SYSTEMD_MARKERS: [&str; 2] = ["systemd", "init.scope"];

/// Classify the host's init system.
///
/// The systemd runtime directory short-circuits detection; otherwise the
/// cgroup membership of process 1 decides.
pub fn detect_init(files: &dyn FileProbe) -> InitSystemKind {
    tracing::info!("Checking init system");

    if files.exists(Path::new(SYSTEMD_RUNTIME_DIR)) {
        tracing::info!("Init system is systemd");
        return InitSystemKind::Systemd;
    }

    let kind = match read_text_file(files, Path::new(INIT_CGROUP_FILE)) {
        Some(content) => classify_cgroup(&content),
        None => InitSystemKind::Unknown,
    };
    tracing::info!("Init system is {}", kind);
    kind
}

/// Classify `/proc/1/cgroup` content.
///
/// Each entry has the form `hierarchy-ID:controller-list:cgroup-path`.
pub fn classify_cgroup(content: &str) -> InitSystemKind {
    let entries: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| is_cgroup_entry(line))
        .collect();

    if entries
        .iter()
        .any(|entry| SYSTEMD_MARKERS.iter().any(|marker| entry.contains(marker)))
    {
        InitSystemKind::Systemd
    } else if !entries.is_empty() {
        InitSystemKind::CgroupOnly
    } else {
        InitSystemKind::Unknown
    }
}

fn is_cgroup_entry(line: &str) -> bool {
    let mut parts = line.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(id), Some(_controllers), Some(path)) => {
            !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) && path.starts_with('/')
        }
        _ => false,
    }
}
