//! `fetchkit size <path>` – print a file's size in megabytes.

use anyhow::Result;
use fetchkit_core::fs_util;
use std::path::Path;

/// Prints the size in megabytes (unrounded). Strict: a missing path is an
/// error, unlike the lenient fallback inside the download result.
pub async fn run_size(path: &Path) -> Result<()> {
    let mb = fs_util::size_mb(path).await?;
    println!("{}  {}", mb, path.display());
    Ok(())
}
