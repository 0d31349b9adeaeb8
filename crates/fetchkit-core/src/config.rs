use crate::download::DEFAULT_TIMEOUT_MS;
use crate::transport::TransportOptions;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/fetchkit/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchkitConfig {
    /// Default wall-clock bound for bounded downloads, in milliseconds.
    pub default_timeout_ms: u64,
    /// TCP/TLS connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Maximum redirects to follow per request.
    pub max_redirections: u32,
    /// Optional User-Agent header (None = curl default).
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for FetchkitConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
            connect_timeout_secs: 30,
            max_redirections: 10,
            user_agent: None,
        }
    }
}

impl FetchkitConfig {
    /// Transport options derived from this config.
    pub fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            max_redirections: self.max_redirections,
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fetchkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FetchkitConfig = toml::from_str(&data)?;
    Ok(cfg)
}
