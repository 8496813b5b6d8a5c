// ABOUTME: Read-only filesystem probes used by the detectors.
// ABOUTME: LocalFs reads the real host; read failures degrade to None.

use std::io;
use std::path::Path;

/// Read-only view of host files and markers.
pub trait FileProbe: Send + Sync {
    /// Whether a file, directory or socket exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the full contents of a small text file.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Probes the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileProbe for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Read a text file, logging and returning None if it is unavailable.
pub fn read_text_file(files: &dyn FileProbe, path: &Path) -> Option<String> {
    tracing::info!("Reading file {}", path.display());
    match files.read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::error!("Reading file at {} failed: {}", path.display(), e);
            None
        }
    }
}
