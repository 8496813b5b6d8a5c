// ABOUTME: Entry point for the kubeprep CLI application.
// ABOUTME: Loads configuration, runs the preflight pipeline and sets the exit status.

mod cli;

use clap::Parser;
use cli::Cli;
use kubeprep::config::Config;
use kubeprep::error::{Error, Result};
use kubeprep::exec::SystemRunner;
use kubeprep::host::LocalFs;
use kubeprep::output::{Output, OutputMode};
use kubeprep::ports::TcpProbe;
use kubeprep::preflight::{HostProbes, run_preflight};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose/quiet flags
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet || cli.json {
        EnvFilter::new("warn")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut output = Output::new(OutputMode::from_flags(cli.quiet, cli.json));

    if let Err(e) = run(cli, &mut output).await {
        match &e {
            Error::Preflight(err) => output.failure(err),
            other => output.error(&other.to_string()),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &mut Output) -> Result<()> {
    let config = match cli.config {
        Some(path) => Config::load(&path)?,
        None => Config::discover(&env::current_dir()?)?,
    };

    let commands = SystemRunner::new(config.command_timeout);
    let probes = HostProbes {
        commands: &commands,
        files: &LocalFs,
        ports: &TcpProbe,
    };

    output.progress("Checking Kubernetes node readiness");
    output.start_timer();

    let report = run_preflight(config, probes, |stage| output.stage(stage)).await?;
    output.report(&report);

    Ok(())
}
