use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable naming the g home directory.
pub const ENV_HOME: &str = "G_HOME";
/// Environment variable naming the download mirror base URL.
pub const ENV_MIRROR: &str = "G_MIRROR";
/// Root of the active Go toolchain.
pub const ENV_GOROOT: &str = "GOROOT";

pub const DEFAULT_MIRROR: &str = "https://go.dev/dl/";
pub const DEFAULT_CATALOG_URL: &str = "https://go.dev/dl/?mode=json&include=all";

/// Configuration read from `~/.config/g/config.toml`.
///
/// The file is optional and never written by g; missing keys fall back to
/// defaults. `G_HOME` and `G_MIRROR` override the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GConfig {
    /// Base URL package file names are joined onto.
    pub mirror: String,
    /// URL of the JSON release feed.
    pub catalog_url: String,
    /// g home directory; `~/.g` when unset.
    pub home: Option<PathBuf>,
    /// Connect timeout for HTTP requests, in seconds.
    pub connect_timeout_secs: u64,
    /// Abort a transfer that stays below 1 KiB/s for this many seconds.
    pub low_speed_time_secs: u64,
}

impl Default for GConfig {
    fn default() -> Self {
        Self {
            mirror: DEFAULT_MIRROR.to_string(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            home: None,
            connect_timeout_secs: 30,
            low_speed_time_secs: 60,
        }
    }
}

impl GConfig {
    /// Apply `G_HOME` / `G_MIRROR` overrides. `lookup` is usually `std::env::var`.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mirror) = lookup(ENV_MIRROR).filter(|v| !v.trim().is_empty()) {
            self.mirror = mirror.trim().to_string();
        }
        if let Some(home) = lookup(ENV_HOME).filter(|v| !v.trim().is_empty()) {
            self.home = Some(PathBuf::from(home));
        }
        self
    }

    /// Resolved g home directory.
    pub fn home_dir(&self) -> Result<PathBuf> {
        if let Some(home) = &self.home {
            return Ok(home.clone());
        }
        let user_home = std::env::var_os("HOME").context("HOME is not set and no g home configured")?;
        Ok(PathBuf::from(user_home).join(".g"))
    }

    /// Directory packages are downloaded into.
    pub fn downloads_dir(&self) -> Result<PathBuf> {
        Ok(self.home_dir()?.join("downloads"))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("g")?;
    Ok(xdg_dirs.get_config_home().join("g").join("config.toml"))
}

/// Load configuration from disk (defaults if the file does not exist), then
/// apply environment overrides.
pub fn load() -> Result<GConfig> {
    let path = config_path()?;
    let cfg = if path.exists() {
        let data =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?
    } else {
        tracing::debug!("no config at {}, using defaults", path.display());
        GConfig::default()
    };
    Ok(cfg.with_env_overrides(|k| std::env::var(k).ok()))
}
