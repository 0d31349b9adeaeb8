//! Filesystem helpers: size query in megabytes and checked deletion.

use crate::error::Exception;
use anyhow::{Context, Result};
use std::path::Path;

const BYTES_PER_MB: f64 = (1024 * 1024) as f64;

/// Returns the byte size of `path` divided by 1048576 (megabytes, unrounded).
///
/// Strict: a missing or inaccessible path is an error. The download operations
/// apply their lenient `0.0` fallback locally; nothing else should.
pub async fn size_mb(path: &Path) -> Result<f64> {
    let meta = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("stat {}", path.display()))?;
    Ok(meta.len() as f64 / BYTES_PER_MB)
}

/// Deletes the file at `path`. Any underlying failure (missing file included)
/// is mapped to the `FILE_DELETE_ERROR` domain exception.
pub async fn remove_file(path: &Path) -> Result<(), Exception> {
    tokio::fs::remove_file(path).await.map_err(|e| {
        tracing::debug!(path = %path.display(), "delete failed: {}", e);
        Exception::with_msg("FILE_DELETE_ERROR", e.to_string())
    })
}
