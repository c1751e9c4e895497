//! CLI for the catalog tools. Both commands run with no arguments; flags only
//! override the paths and pacing taken from the config file.

mod commands;

use anyhow::Result;
use anj_core::config::{self, AnjConfig};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use commands::{run_collect_icons, run_toml2json};

/// Discover an icon URL for every catalog entry and write it back.
#[derive(Debug, Parser)]
#[command(name = "collect-icons")]
#[command(about = "Add icon_url to every catalog entry with an address", long_about = None)]
pub struct CollectIcons {
    /// Catalog file to update in place (default: awesome-nostr-japan.toml).
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Pause after each entry, in milliseconds (default 500).
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
}

impl CollectIcons {
    pub fn run_from_args() -> Result<()> {
        let cli = Self::parse();
        let cfg = config::load_or_default();
        tracing::debug!("loaded config: {:?}", cfg);
        cli.run(&cfg)
    }

    pub fn run(&self, cfg: &AnjConfig) -> Result<()> {
        run_collect_icons(cfg, &self.catalog_path(cfg), self.delay(cfg))
    }

    pub fn catalog_path(&self, cfg: &AnjConfig) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(|| cfg.catalog_path.clone())
    }

    pub fn delay(&self, cfg: &AnjConfig) -> Duration {
        self.delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| cfg.probe.delay())
    }
}

/// Export the catalog as JSON.
#[derive(Debug, Parser)]
#[command(name = "toml2json")]
#[command(about = "Convert the catalog TOML into data.json", long_about = None)]
pub struct Toml2Json {
    /// Catalog file to read (default: awesome-nostr-japan.toml).
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// JSON file to write (default: data.json).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Toml2Json {
    pub fn run_from_args() -> Result<()> {
        let cli = Self::parse();
        let cfg = config::load_or_default();
        tracing::debug!("loaded config: {:?}", cfg);
        cli.run(&cfg)
    }

    pub fn run(&self, cfg: &AnjConfig) -> Result<()> {
        let (input, output) = self.paths(cfg);
        run_toml2json(&input, &output)
    }

    /// (input, output)
    pub fn paths(&self, cfg: &AnjConfig) -> (PathBuf, PathBuf) {
        (
            self.input.clone().unwrap_or_else(|| cfg.catalog_path.clone()),
            self.output
                .clone()
                .unwrap_or_else(|| cfg.json_output_path.clone()),
        )
    }
}

#[cfg(test)]
mod tests;
