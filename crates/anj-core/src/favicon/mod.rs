//! Favicon discovery for catalog addresses.
//!
//! Stages run in order and the first hit wins:
//! 1. icon `<link>` elements on the page, each verified with a HEAD;
//! 2. `/favicon.ico` at the site root;
//! 3. a lookup-service URL built from the host (never requested here).
//!
//! If the page itself cannot be fetched or read, stages 1 and 2 are abandoned
//! and the lookup-service URL is returned. Only addresses that fail the
//! http(s) check come back unresolved.

mod error;
mod fetch;
mod links;
mod site;
mod source;
#[cfg(test)]
pub(crate) mod testing;

pub use error::FetchError;
pub use fetch::{verify, CurlFetcher, Fetcher};
pub use links::icon_link_hrefs;
pub use site::Site;
pub use source::{ConventionalPath, FallbackService, IconSource, PageLinks};

use crate::config::ProbeConfig;

/// Which stage produced an icon URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconOrigin {
    PageLink,
    Conventional,
    FallbackService,
}

/// Outcome of resolving one address.
#[derive(Debug)]
pub struct ResolvedIcon {
    pub url: String,
    pub origin: IconOrigin,
    /// Set when page inspection failed and the chain jumped to the fallback service.
    pub page_error: Option<FetchError>,
}

/// Runs the discovery chain against a `Fetcher`.
pub struct IconResolver<F> {
    fetcher: F,
    sources: Vec<Box<dyn IconSource>>,
    fallback: FallbackService,
}

impl<F: Fetcher> IconResolver<F> {
    /// Standard chain: page links, `/favicon.ico`, lookup service.
    pub fn new(fetcher: F, cfg: &ProbeConfig) -> Self {
        let fallback = FallbackService::new(&cfg.fallback_service_host, cfg.fallback_icon_size);
        let sources: Vec<Box<dyn IconSource>> = vec![
            Box::new(PageLinks),
            Box::new(ConventionalPath),
            Box::new(fallback.clone()),
        ];
        Self::with_sources(fetcher, sources, fallback)
    }

    /// Custom chain. `fallback` answers when a stage errors or every stage passes.
    pub fn with_sources(
        fetcher: F,
        sources: Vec<Box<dyn IconSource>>,
        fallback: FallbackService,
    ) -> Self {
        Self {
            fetcher,
            sources,
            fallback,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Resolve an icon for `address`. `None` only for non-http(s) or empty addresses.
    pub fn resolve(&self, address: &str) -> Option<ResolvedIcon> {
        let site = Site::parse(address)?;

        for source in &self.sources {
            match source.find(&site, &self.fetcher) {
                Ok(Some(url)) => {
                    tracing::debug!(address, url = %url, origin = ?source.origin(), "icon resolved");
                    return Some(ResolvedIcon {
                        url,
                        origin: source.origin(),
                        page_error: None,
                    });
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(address, error = %err, "page inspection failed, using fallback service");
                    return Some(ResolvedIcon {
                        url: self.fallback.url_for(&site),
                        origin: IconOrigin::FallbackService,
                        page_error: Some(err),
                    });
                }
            }
        }

        Some(ResolvedIcon {
            url: self.fallback.url_for(&site),
            origin: IconOrigin::FallbackService,
            page_error: None,
        })
    }
}
