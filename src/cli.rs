// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: The preflight runs with no arguments; flags only adjust config and output.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kubeprep")]
#[command(about = "Check that this host is ready for a Kubernetes node install")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: kubeprep.yml in the current directory, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Print JSON lines instead of text
    #[arg(long)]
    pub json: bool,
}
