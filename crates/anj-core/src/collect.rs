//! Batch icon collection over a catalog.
//!
//! Walks processable entries in document order, resolves each address, writes
//! `icon_url`, and pauses between entries. Progress goes to `out`, page fetch
//! diagnostics to `diag`; per-entry failures never stop the batch.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::favicon::{Fetcher, IconOrigin, IconResolver};

/// Counters for one collection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectSummary {
    /// Entries with an `address` key outside skipped sections.
    pub total: usize,
    /// Entries that received an `icon_url`.
    pub resolved: usize,
    /// Entries left untouched (empty or non-http(s) address).
    pub unresolved: usize,
    pub from_page: usize,
    pub from_conventional: usize,
    pub from_fallback: usize,
    /// Resolutions where the page fetch failed and the fallback service was used.
    pub page_errors: usize,
}

impl CollectSummary {
    fn record(&mut self, origin: IconOrigin) {
        self.resolved += 1;
        match origin {
            IconOrigin::PageLink => self.from_page += 1,
            IconOrigin::Conventional => self.from_conventional += 1,
            IconOrigin::FallbackService => self.from_fallback += 1,
        }
    }
}

/// Options for a collection run.
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// Top-level sections to leave alone.
    pub skip_sections: Vec<String>,
    /// Pause after every entry.
    pub delay: Duration,
}

/// Resolve icons for every processable entry of `catalog`, mutating it in place.
pub fn collect_icons<F: Fetcher>(
    catalog: &mut Catalog,
    resolver: &IconResolver<F>,
    opts: &CollectOptions,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> Result<CollectSummary> {
    let mut summary = CollectSummary {
        total: catalog.count_entries(&opts.skip_sections),
        ..CollectSummary::default()
    };
    writeln!(out, "Processing {} items...", summary.total)?;

    for (i, mut entry) in catalog.entries_mut(&opts.skip_sections).enumerate() {
        write!(out, "[{}/{}] {}... ", i + 1, summary.total, entry.display_name())?;
        out.flush()?;

        let resolved = entry.address().and_then(|address| resolver.resolve(address));
        match resolved {
            Some(icon) => {
                if let Some(err) = &icon.page_error {
                    summary.page_errors += 1;
                    writeln!(
                        diag,
                        "  Error fetching {}: {}",
                        entry.address().unwrap_or_default(),
                        err
                    )?;
                }
                summary.record(icon.origin);
                entry.set_icon_url(icon.url);
                writeln!(out, "OK")?;
            }
            None => {
                summary.unresolved += 1;
                tracing::debug!(
                    section = entry.section(),
                    key = entry.key(),
                    "address not resolvable"
                );
                writeln!(out, "No icon")?;
            }
        }

        if !opts.delay.is_zero() {
            std::thread::sleep(opts.delay);
        }
    }

    tracing::info!(
        total = summary.total,
        resolved = summary.resolved,
        unresolved = summary.unresolved,
        from_page = summary.from_page,
        from_conventional = summary.from_conventional,
        from_fallback = summary.from_fallback,
        page_errors = summary.page_errors,
        "icon collection finished"
    );
    Ok(summary)
}

/// Load the catalog at `path`, collect icons, and write it back over `path`.
pub fn update_catalog_file<F: Fetcher>(
    path: &Path,
    resolver: &IconResolver<F>,
    opts: &CollectOptions,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> Result<CollectSummary> {
    let mut catalog = Catalog::load(path)?;
    let summary = collect_icons(&mut catalog, resolver, opts, out, diag)?;
    catalog
        .save(path)
        .with_context(|| format!("update catalog: {}", path.display()))?;
    Ok(summary)
}
