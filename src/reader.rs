use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads raw billing log lines from disk
pub struct LogReader;

impl LogReader {
    /// Read every line of `path` in order, terminators stripped.
    ///
    /// Blank lines are kept: they are rejected later by validation, but a blank
    /// first or last line still defines the log boundary. Invalid UTF-8 in a
    /// line is replaced rather than failing the whole file.
    pub async fn read_lines(path: &Path) -> Result<Vec<String>> {
        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read log file: {}", path.display()))?;

        let lines = split_lines(&content);

        info!(path = %path.display(), lines = lines.len(), "Loaded billing log");
        debug!(bytes = content.len(), "Log file size");

        Ok(lines)
    }
}

/// Split raw bytes on `\n`, dropping a trailing `\r` from each line.
fn split_lines(content: &[u8]) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix(b"\n").unwrap_or(content);

    body.split(|b| *b == b'\n')
        .enumerate()
        .map(|(index, raw)| {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            match std::str::from_utf8(raw) {
                Ok(line) => line.to_string(),
                Err(e) => {
                    warn!(line_number = index + 1, reason = %e, "Line is not valid UTF-8, replacing invalid bytes");
                    String::from_utf8_lossy(raw).into_owned()
                }
            }
        })
        .collect()
}
