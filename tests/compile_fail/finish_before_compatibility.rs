// ABOUTME: Compile-fail test verifying finish cannot be called on RuntimeChecked.
// ABOUTME: This test should fail to compile, validating state machine safety.

use kubeprep::preflight::{Preflight, RuntimeChecked};

fn try_skip_compatibility(preflight: Preflight<RuntimeChecked>) {
    // ERROR: finish() method doesn't exist on Preflight<RuntimeChecked>
    let _report = preflight.finish();
}

fn main() {}
