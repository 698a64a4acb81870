//! Configuration loaded from `~/.config/httpget/config.toml`.

use crate::fetch::{Mechanism, RequestOptions, DEFAULT_ACCEPT, DEFAULT_MAX_REDIRECTIONS, USER_AGENT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

fn default_accept() -> Option<String> {
    Some(DEFAULT_ACCEPT.to_string())
}

fn default_max_redirections() -> u32 {
    DEFAULT_MAX_REDIRECTIONS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpGetConfig {
    /// Mechanism used by `get` when none is given: "curl" or "reqwest" (default).
    #[serde(default)]
    pub mechanism: Mechanism,
    /// User-Agent header sent on every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Accept header; omit the key to keep the default, set to "" to send none.
    #[serde(default = "default_accept")]
    pub accept: Option<String>,
    /// Maximum redirect hops.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
}

impl Default for HttpGetConfig {
    fn default() -> Self {
        Self {
            mechanism: Mechanism::default(),
            user_agent: default_user_agent(),
            accept: default_accept(),
            max_redirections: default_max_redirections(),
        }
    }
}

impl HttpGetConfig {
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            user_agent: self.user_agent.clone(),
            accept: self.accept.clone().filter(|a| !a.trim().is_empty()),
            max_redirections: self.max_redirections,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("httpget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Parse configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<HttpGetConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: HttpGetConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Write `cfg` to `path`, creating parent directories.
pub fn write_to(path: &Path, cfg: &HttpGetConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HttpGetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HttpGetConfig::default();
        write_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}
