//! Bounded file fetcher: GET a URL, persist the body, report the size.
//!
//! The network phase runs blocking curl on a worker thread; the write and the
//! size query use tokio's fs. Cancellation only covers the network phase —
//! once the body has arrived the write always proceeds.

use crate::cancel::{CancelToken, TimeoutGuard};
use crate::error::FetchError;
use crate::fs_util;
use crate::transport::{self, TransportOptions};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// Default wall-clock bound for [`download_file_timeout`], in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Result of a completed download.
///
/// Compatibility note: the `url` field carries the DESTINATION PATH the bytes
/// were written to, not the source locator. The historical response shape named
/// it `url` and downstream consumers key on that name, so it is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadResult {
    /// Destination path (see struct docs; not the source URL).
    pub url: String,
    /// Status token; `"ok"` on success.
    pub msg: String,
    /// Size in megabytes of the file now at the destination, or `0.0` if the
    /// post-write size query failed.
    pub size: f64,
}

/// Downloads `url` and writes the full body to `dest`, replacing any existing
/// file. Transport and write failures propagate; a failed size query after a
/// successful write degrades to `size: 0.0` without affecting `msg`.
pub async fn download_file(url: &str, dest: &Path) -> Result<DownloadResult> {
    download_file_with(url, dest, &CancelToken::new(), TransportOptions::default()).await
}

/// Like [`download_file`] but bounded by `timeout_ms` of wall-clock time. If
/// the timer fires before the response completes, the transfer is aborted and
/// the call fails with a cancellation error; nothing is written. The timer is
/// disarmed on every exit path, so no stale cancellation can fire later.
pub async fn download_file_timeout(
    url: &str,
    dest: &Path,
    timeout_ms: u64,
) -> Result<DownloadResult> {
    let token = CancelToken::new();
    let _guard = TimeoutGuard::arm(&token, Duration::from_millis(timeout_ms));
    download_file_cancellable(url, dest, &token).await
    // _guard drops here: disarm is guaranteed on success and failure alike.
}

/// Like [`download_file`] with a caller-owned cancellation token, so an
/// enclosing deadline can share the token across several operations.
pub async fn download_file_cancellable(
    url: &str,
    dest: &Path,
    token: &CancelToken,
) -> Result<DownloadResult> {
    download_file_with(url, dest, token, TransportOptions::default()).await
}

/// Full form: caller-owned token plus explicit transport options (used by the
/// CLI to apply config-file settings).
pub async fn download_file_with(
    url: &str,
    dest: &Path,
    token: &CancelToken,
    opts: TransportOptions,
) -> Result<DownloadResult> {
    let request_url = url.to_string();
    let request_token = token.clone();
    let body = tokio::task::spawn_blocking(move || {
        transport::fetch_bytes(&request_url, &request_token, &opts)
    })
    .await
    .context("download worker panicked")?
    .with_context(|| format!("GET {} failed", url))?;

    tracing::debug!(url, bytes = body.len(), dest = %dest.display(), "response received");

    tokio::fs::write(dest, &body)
        .await
        .map_err(FetchError::Write)
        .with_context(|| format!("failed to write {}", dest.display()))?;

    // Lenient by contract: a failed stat after a successful write reports 0.0
    // and leaves msg untouched.
    let size = match fs_util::size_mb(dest).await {
        Ok(mb) => mb,
        Err(e) => {
            tracing::warn!(dest = %dest.display(), "size query failed after write: {:#}", e);
            0.0
        }
    };

    Ok(DownloadResult {
        url: dest.display().to_string(),
        msg: "ok".to_string(),
        size,
    })
}
