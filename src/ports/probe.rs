// ABOUTME: Single-attempt TCP probe with a connect timeout.
// ABOUTME: Only an explicit refusal counts as proof that nothing is listening.

use async_trait::async_trait;
use std::io;
use std::time::Duration;
use tokio::net::TcpStream;

/// What a single connect attempt learned about a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortState {
    /// The connection was accepted.
    Listening,
    /// The host answered and refused the connection.
    Refused,
    /// No answer either way: resolution failure, timeout or a local socket fault.
    Indeterminate,
}

/// Checks what, if anything, accepts TCP connections on a port.
#[async_trait]
pub trait PortProbe: Send + Sync {
    async fn port_state(&self, host: &str, port: u16, timeout: Duration) -> PortState;
}

/// Probes ports with a real TCP connect.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpProbe;

#[async_trait]
impl PortProbe for TcpProbe {
    async fn port_state(&self, host: &str, port: u16, timeout: Duration) -> PortState {
        match tokio::time::timeout(timeout, TcpStream::connect((host, port))).await {
            Ok(Ok(_stream)) => {
                tracing::debug!(port, "Connection accepted");
                PortState::Listening
            }
            Ok(Err(e)) if e.kind() == io::ErrorKind::ConnectionRefused => {
                tracing::debug!(port, "Connection refused");
                PortState::Refused
            }
            Ok(Err(e)) => {
                tracing::debug!(host, port, error = %e, "Connection failed");
                PortState::Indeterminate
            }
            Err(_) => {
                tracing::debug!(host, port, "Connection timed out");
                PortState::Indeterminate
            }
        }
    }
}
