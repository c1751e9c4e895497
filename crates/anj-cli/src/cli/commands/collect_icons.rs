//! `collect-icons` – resolve icons for the catalog and rewrite it.

use anyhow::Result;
use anj_core::collect::{update_catalog_file, CollectOptions};
use anj_core::config::AnjConfig;
use anj_core::favicon::{CurlFetcher, IconResolver};
use std::io;
use std::path::Path;
use std::time::Duration;

pub fn run_collect_icons(cfg: &AnjConfig, catalog_path: &Path, delay: Duration) -> Result<()> {
    let resolver = IconResolver::new(CurlFetcher::new(&cfg.probe), &cfg.probe);
    let opts = CollectOptions {
        skip_sections: cfg.skip_sections.clone(),
        delay,
    };

    let summary = update_catalog_file(
        catalog_path,
        &resolver,
        &opts,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    tracing::info!(
        "updated {}: {}/{} entries have icons",
        catalog_path.display(),
        summary.resolved,
        summary.total
    );

    println!("\nDone! Updated {}", catalog_path.display());
    Ok(())
}
