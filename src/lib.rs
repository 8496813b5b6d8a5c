// ABOUTME: Library root for kubeprep - exposes the preflight pipeline and its probes.
// ABOUTME: The main binary is in main.rs.

pub mod compat;
pub mod config;
pub mod detect;
pub mod error;
pub mod exec;
pub mod host;
pub mod output;
pub mod ports;
pub mod preflight;
pub mod sysctl;
