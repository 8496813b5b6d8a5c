// ABOUTME: Host filesystem access for probes and configuration writes.
// ABOUTME: FileProbe is the read seam; writers operate on real paths.

mod probe;
mod write;

pub use probe::{FileProbe, LocalFs, read_text_file};
pub use write::{append_text_file, write_text_file};
