//! `fetchkit get <url> [dest]` – download a URL, bounded by default.

use anyhow::Result;
use fetchkit_core::cancel::{CancelToken, TimeoutGuard};
use fetchkit_core::config::FetchkitConfig;
use fetchkit_core::download;
use fetchkit_core::url_name;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Downloads `url` to `dest` (or a URL-derived filename in the current
/// directory) and prints the result as JSON. The timeout comes from the flag,
/// then the config default; `--no-timeout` disables the bound entirely.
pub async fn run_get(
    cfg: &FetchkitConfig,
    url: &str,
    dest: Option<&Path>,
    timeout_ms: Option<u64>,
    no_timeout: bool,
) -> Result<()> {
    let dest: PathBuf = match dest {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(url_name::default_filename(url)),
    };
    tracing::info!(url, dest = %dest.display(), "starting download");

    let token = CancelToken::new();
    let guard = if no_timeout {
        None
    } else {
        let ms = timeout_ms.unwrap_or(cfg.default_timeout_ms);
        Some(TimeoutGuard::arm(&token, Duration::from_millis(ms)))
    };

    let result = download::download_file_with(url, &dest, &token, cfg.transport_options()).await?;
    drop(guard);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
