//! `fetchkit remove <path>` – delete a file.

use anyhow::Result;
use fetchkit_core::fs_util;
use std::path::Path;

/// Deletes the file; failures surface as the FILE_DELETE_ERROR domain
/// exception.
pub async fn run_remove(path: &Path) -> Result<()> {
    fs_util::remove_file(path).await?;
    println!("Removed {}", path.display());
    Ok(())
}
