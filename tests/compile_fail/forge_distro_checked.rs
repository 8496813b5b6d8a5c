// ABOUTME: Compile-fail test verifying state data cannot be forged by callers.
// ABOUTME: This test should fail to compile because state fields are crate-private.

use kubeprep::detect::DistroFamily;
use kubeprep::preflight::DistroChecked;

fn main() {
    // ERROR: fields of DistroChecked are private to the crate
    let _state = DistroChecked { distro: DistroFamily::Debian };
}
