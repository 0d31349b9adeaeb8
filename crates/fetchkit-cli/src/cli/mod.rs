//! CLI for the fetchkit download helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fetchkit_core::config;
use std::path::PathBuf;

use commands::{run_get, run_remove, run_size};

/// Top-level CLI for fetchkit.
#[derive(Debug, Parser)]
#[command(name = "fetchkit")]
#[command(about = "fetchkit: bounded-time file downloads and filesystem helpers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a URL to a file.
    Get {
        /// Direct HTTP/HTTPS URL to download.
        url: String,

        /// Destination path; defaults to the filename derived from the URL
        /// path, in the current directory.
        dest: Option<PathBuf>,

        /// Wall-clock bound in milliseconds (default from config, 1000).
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,

        /// Run without a wall-clock bound.
        #[arg(long, conflicts_with = "timeout_ms")]
        no_timeout: bool,
    },

    /// Print a file's size in megabytes.
    Size {
        /// Path to the file.
        path: PathBuf,
    },

    /// Delete a file.
    Remove {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                url,
                dest,
                timeout_ms,
                no_timeout,
            } => run_get(&cfg, &url, dest.as_deref(), timeout_ms, no_timeout).await?,
            CliCommand::Size { path } => run_size(&path).await?,
            CliCommand::Remove { path } => run_remove(&path).await?,
        }

        Ok(())
    }
}
