// ABOUTME: TCP port probing and the required-port readiness check.
// ABOUTME: Exposes the PortProbe seam and the Kubernetes port set.

mod check;
mod probe;

pub use check::{
    CONTROL_PLANE_PORTS, DEFAULT_PORT_CONCURRENCY, DEFAULT_PORT_TIMEOUT, NODE_PORT_RANGE,
    PortCheckError, PortPolicy, PortScan, check_ports, required_ports,
};
pub use probe::{PortProbe, PortState, TcpProbe};
