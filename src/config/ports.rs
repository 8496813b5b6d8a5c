// ABOUTME: Port check configuration: policy, timing and the required port set.
// ABOUTME: Parses NodePort ranges like "30000-32767" or {start, end}.

use super::deserialize::deserialize_port_range;
use crate::ports::{
    CONTROL_PLANE_PORTS, DEFAULT_PORT_CONCURRENCY, DEFAULT_PORT_TIMEOUT, NODE_PORT_RANGE,
    PortPolicy, PortScan, required_ports,
};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortsConfig {
    #[serde(default)]
    pub policy: PortPolicy,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[serde(default = "default_control_plane")]
    pub control_plane: Vec<u16>,

    #[serde(default, deserialize_with = "deserialize_port_range")]
    pub node_port_range: PortRange,
}

fn default_timeout() -> Duration {
    DEFAULT_PORT_TIMEOUT
}

fn default_concurrency() -> usize {
    DEFAULT_PORT_CONCURRENCY
}

fn default_control_plane() -> Vec<u16> {
    CONTROL_PLANE_PORTS.to_vec()
}

impl Default for PortsConfig {
    fn default() -> Self {
        PortsConfig {
            policy: PortPolicy::default(),
            timeout: default_timeout(),
            concurrency: default_concurrency(),
            control_plane: default_control_plane(),
            node_port_range: PortRange::default(),
        }
    }
}

impl PortsConfig {
    /// Build the scan for `host` from this configuration.
    pub fn scan(&self, host: &str) -> PortScan {
        PortScan {
            host: host.to_string(),
            ports: required_ports(
                &self.control_plane,
                self.node_port_range.start..=self.node_port_range.end,
            ),
            policy: self.policy,
            timeout: self.timeout,
            concurrency: self.concurrency,
        }
    }
}

/// Inclusive port range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

impl PortRange {
    pub fn new(start: u16, end: u16) -> Result<Self, String> {
        if start > end {
            return Err(format!("port range start {start} is after end {end}"));
        }
        Ok(PortRange { start, end })
    }

    /// Parse `start-end`, or a single port.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let (start, end) = match s.split_once('-') {
            Some((start, end)) => (start.trim(), end.trim()),
            None => (s, s),
        };

        let start = start
            .parse::<u16>()
            .map_err(|_| format!("invalid port: {}", start))?;
        let end = end
            .parse::<u16>()
            .map_err(|_| format!("invalid port: {}", end))?;

        Self::new(start, end)
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        usize::from(self.end - self.start) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Default for PortRange {
    fn default() -> Self {
        PortRange {
            start: *NODE_PORT_RANGE.start(),
            end: *NODE_PORT_RANGE.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dash_range() {
        let range = PortRange::parse("30000-32767").unwrap();
        assert_eq!(range, PortRange::default());
        assert_eq!(range.len(), 2768);
    }

    #[test]
    fn parse_single_port() {
        let range = PortRange::parse("8080").unwrap();
        assert_eq!(range.start, 8080);
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(PortRange::parse("32767-30000").is_err());
        assert!(PortRange::parse("abc-1").is_err());
    }

    #[test]
    fn default_scan_matches_kubernetes_set() {
        let scan = PortsConfig::default().scan("127.0.0.1");
        assert_eq!(scan.ports, PortScan::kubernetes("127.0.0.1").ports);
    }
}
