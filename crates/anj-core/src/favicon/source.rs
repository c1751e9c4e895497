//! The individual stages of icon discovery.

use url::Url;

use super::fetch::{verify, Fetcher};
use super::links::icon_link_hrefs;
use super::{FetchError, IconOrigin, Site};

/// One stage of the discovery chain.
///
/// `Ok(None)` passes to the next stage. `Err` means the page itself could not be
/// inspected; the resolver then skips straight to the fallback service.
pub trait IconSource {
    fn origin(&self) -> IconOrigin;

    fn find(&self, site: &Site, fetcher: &dyn Fetcher) -> Result<Option<String>, FetchError>;
}

/// Stage 1: scan the page for icon `<link>` elements and verify each in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageLinks;

impl IconSource for PageLinks {
    fn origin(&self) -> IconOrigin {
        IconOrigin::PageLink
    }

    fn find(&self, site: &Site, fetcher: &dyn Fetcher) -> Result<Option<String>, FetchError> {
        let page = fetcher.get_page(site.address())?;
        let hrefs = icon_link_hrefs(&page);
        if hrefs.is_empty() {
            return Ok(None);
        }

        let base = Url::parse(site.address()).map_err(|source| FetchError::Url {
            url: site.address().to_string(),
            source,
        })?;
        for href in hrefs {
            let candidate = match base.join(&href) {
                Ok(u) => u,
                Err(err) => {
                    tracing::debug!(href = %href, error = %err, "unusable icon href");
                    continue;
                }
            };
            if verify(fetcher, candidate.as_str()) {
                return Ok(Some(candidate.into()));
            }
        }
        Ok(None)
    }
}

/// Stage 2: `{scheme}://{netloc}/favicon.ico`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionalPath;

impl ConventionalPath {
    pub fn url_for(site: &Site) -> String {
        format!("{}/favicon.ico", site.base())
    }
}

impl IconSource for ConventionalPath {
    fn origin(&self) -> IconOrigin {
        IconOrigin::Conventional
    }

    fn find(&self, site: &Site, fetcher: &dyn Fetcher) -> Result<Option<String>, FetchError> {
        let url = Self::url_for(site);
        Ok(verify(fetcher, &url).then_some(url))
    }
}

/// Stage 3: a lookup-service URL built from the host. No request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackService {
    host: String,
    size: u32,
}

impl FallbackService {
    pub fn new(host: impl Into<String>, size: u32) -> Self {
        Self {
            host: host.into(),
            size,
        }
    }

    pub fn url_for(&self, site: &Site) -> String {
        format!(
            "https://{}/s2/favicons?domain={}&sz={}",
            self.host,
            site.netloc(),
            self.size
        )
    }
}

impl Default for FallbackService {
    fn default() -> Self {
        Self::new("www.google.com", 64)
    }
}

impl IconSource for FallbackService {
    fn origin(&self) -> IconOrigin {
        IconOrigin::FallbackService
    }

    fn find(&self, site: &Site, _fetcher: &dyn Fetcher) -> Result<Option<String>, FetchError> {
        Ok(Some(self.url_for(site)))
    }
}
