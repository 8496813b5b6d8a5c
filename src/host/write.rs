// ABOUTME: Text file writers for host configuration files.
// ABOUTME: Provides truncating write and explicit append, both flushed before close.

use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Write `text` to `path`, replacing any previous content.
pub async fn write_text_file(path: &Path, text: &str) -> std::io::Result<()> {
    tracing::info!("Writing text file to {}", path.display());
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .await?;
    file.write_all(text.as_bytes()).await?;
    file.flush().await?;
    tracing::info!("File written");
    Ok(())
}

/// Append `text` to `path`, creating the file if needed.
pub async fn append_text_file(path: &Path, text: &str) -> std::io::Result<()> {
    tracing::info!("Appending text file at {}", path.display());
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .await?;
    file.write_all(text.as_bytes()).await?;
    file.flush().await?;
    tracing::info!("File written");
    Ok(())
}
