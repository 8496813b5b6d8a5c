// ABOUTME: Test support utilities.
// ABOUTME: Provides in-memory fakes for commands, files and ports, plus a ready-host builder.

// Each test binary only uses some of these modules, so allow dead_code.
#[allow(dead_code)]
pub mod fake_host;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("kubeprep=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}
