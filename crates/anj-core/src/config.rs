use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Browser-like identification sent with every request; some sites block bare clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Network probing parameters (optional `[probe]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// `User-Agent` header for page fetches and existence checks.
    pub user_agent: String,
    /// Timeout in seconds for the full page GET.
    pub page_timeout_secs: u64,
    /// Timeout in seconds for HEAD existence checks.
    pub probe_timeout_secs: u64,
    /// Pause after each entry, in milliseconds.
    pub delay_millis: u64,
    /// Host of the favicon lookup service used as the last resort.
    pub fallback_service_host: String,
    /// Icon size requested from the lookup service.
    pub fallback_icon_size: u32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_timeout_secs: 10,
            probe_timeout_secs: 5,
            delay_millis: 500,
            fallback_service_host: "www.google.com".to_string(),
            fallback_icon_size: 64,
        }
    }
}

impl ProbeConfig {
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_millis)
    }
}

/// Global configuration loaded from `~/.config/anj/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnjConfig {
    /// Catalog file read by both tools and rewritten by `collect-icons`.
    pub catalog_path: PathBuf,
    /// JSON file written by `toml2json`.
    pub json_output_path: PathBuf,
    /// Top-level sections that hold metadata rather than entries.
    pub skip_sections: Vec<String>,
    pub probe: ProbeConfig,
}

impl Default for AnjConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("awesome-nostr-japan.toml"),
            json_output_path: PathBuf::from("data.json"),
            skip_sections: vec![
                "awesome-nostr-japan".to_string(),
                "License".to_string(),
                "Author".to_string(),
            ],
            probe: ProbeConfig::default(),
        }
    }
}

/// `~/.config/anj/config.toml`. Nothing is created on disk.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("anj")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from `path`. A missing file means built-in defaults;
/// the file is only ever read, never created.
pub fn load_from(path: &Path) -> Result<AnjConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(AnjConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: AnjConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Load the user config, or defaults when absent.
pub fn load() -> Result<AnjConfig> {
    load_from(&config_path()?)
}

/// Like `load`, but never fails: an unreadable config falls back to defaults.
pub fn load_or_default() -> AnjConfig {
    match load() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("using default config: {:#}", err);
            AnjConfig::default()
        }
    }
}
