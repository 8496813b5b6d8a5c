// ABOUTME: Readiness check over the control-plane ports and the NodePort range.
// ABOUTME: Probes run with bounded concurrency; results are consumed in list order.

use super::probe::{PortProbe, PortState};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

/// API server, etcd client/peer, kubelet, scheduler, kube-proxy and controller-manager.
pub const CONTROL_PLANE_PORTS: [u16; 7] = [6443, 2379, 2380, 10250, 10259, 10256, 10257];

/// Ports reserved for NodePort services.
pub const NODE_PORT_RANGE: RangeInclusive<u16> = 30000..=32767;

pub const DEFAULT_PORT_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_PORT_CONCURRENCY: usize = 256;

/// What a required port must look like for the check to pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortPolicy {
    /// Nothing may be listening, so the control plane can bind it.
    #[default]
    MustBeFree,
    /// Something must already accept connections.
    MustBeListening,
}

impl PortPolicy {
    /// Whether `state` satisfies the policy. An indeterminate probe never does.
    fn passes(&self, state: PortState) -> bool {
        matches!(
            (self, state),
            (PortPolicy::MustBeFree, PortState::Refused)
                | (PortPolicy::MustBeListening, PortState::Listening)
        )
    }
}

/// A planned scan of a fixed port list against one host.
#[derive(Debug, Clone)]
pub struct PortScan {
    pub host: String,
    pub ports: Vec<u16>,
    pub policy: PortPolicy,
    pub timeout: Duration,
    pub concurrency: usize,
}

impl PortScan {
    /// The full Kubernetes port set with default timing.
    pub fn kubernetes(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ports: required_ports(&CONTROL_PLANE_PORTS, NODE_PORT_RANGE),
            policy: PortPolicy::default(),
            timeout: DEFAULT_PORT_TIMEOUT,
            concurrency: DEFAULT_PORT_CONCURRENCY,
        }
    }
}

/// Control-plane ports first, then the NodePort range in ascending order.
pub fn required_ports(control_plane: &[u16], node_ports: RangeInclusive<u16>) -> Vec<u16> {
    control_plane.iter().copied().chain(node_ports).collect()
}

/// A required port in the wrong state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortCheckError {
    #[error("port {port} on {host} already has a listener")]
    InUse { host: String, port: u16 },

    #[error("port {port} on {host} is not reachable")]
    Unreachable { host: String, port: u16 },

    #[error("state of port {port} on {host} could not be determined")]
    Indeterminate { host: String, port: u16 },
}

impl PortCheckError {
    pub fn port(&self) -> u16 {
        match self {
            PortCheckError::InUse { port, .. }
            | PortCheckError::Unreachable { port, .. }
            | PortCheckError::Indeterminate { port, .. } => *port,
        }
    }
}

/// Check every port in `scan`, returning the first failure in list order.
///
/// Up to `scan.concurrency` probes are in flight at once. Returning early drops
/// the stream, which cancels the probes still pending.
pub async fn check_ports(probe: &dyn PortProbe, scan: &PortScan) -> Result<usize, PortCheckError> {
    tracing::info!(
        host = %scan.host,
        count = scan.ports.len(),
        policy = ?scan.policy,
        "Checking required ports"
    );

    let host = scan.host.as_str();
    let timeout = scan.timeout;
    let mut results = stream::iter(scan.ports.iter().copied())
        .map(move |port| async move { (port, probe.port_state(host, port, timeout).await) })
        .buffered(scan.concurrency.max(1));

    let mut checked = 0;
    while let Some((port, state)) = results.next().await {
        if !scan.policy.passes(state) {
            tracing::error!(?state, "Port check for {} failed", port);
            let host = scan.host.clone();
            return Err(match state {
                PortState::Listening => PortCheckError::InUse { host, port },
                PortState::Refused => PortCheckError::Unreachable { host, port },
                PortState::Indeterminate => PortCheckError::Indeterminate { host, port },
            });
        }
        checked += 1;
    }

    tracing::info!(checked, "All required ports passed");
    Ok(checked)
}
