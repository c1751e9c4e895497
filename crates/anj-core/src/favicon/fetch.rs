//! Blocking HTTP access behind a small capability trait.
//!
//! `CurlFetcher` uses libcurl easy handles (via the `curl` crate): one GET per
//! catalog address and HEAD requests for icon existence checks. Both follow
//! redirects and send the configured `User-Agent`.

use std::time::Duration;

use crate::config::ProbeConfig;

use super::FetchError;

const MAX_REDIRECTS: u32 = 10;

/// Network operations the icon resolver needs. Tests substitute in-memory fakes.
pub trait Fetcher {
    /// GET `url` and return the body of a 2xx response as text.
    fn get_page(&self, url: &str) -> Result<String, FetchError>;

    /// HEAD `url` and return the final status code.
    fn head_status(&self, url: &str) -> Result<u32, FetchError>;
}

/// True if a HEAD to `url` ends in HTTP 200. Failures count as "not there".
pub fn verify(fetcher: &dyn Fetcher, url: &str) -> bool {
    match fetcher.head_status(url) {
        Ok(200) => true,
        Ok(status) => {
            tracing::debug!(url, status, "icon candidate rejected");
            false
        }
        Err(err) => {
            tracing::debug!(url, error = %err, "icon candidate unreachable");
            false
        }
    }
}

/// libcurl-backed fetcher with separate page and probe timeouts.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    user_agent: String,
    page_timeout: Duration,
    probe_timeout: Duration,
}

impl CurlFetcher {
    pub fn new(cfg: &ProbeConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            page_timeout: cfg.page_timeout(),
            probe_timeout: cfg.probe_timeout(),
        }
    }

    fn easy(&self, url: &str, timeout: Duration) -> Result<curl::easy::Easy, FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.useragent(&self.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTS)?;
        easy.connect_timeout(timeout)?;
        easy.timeout(timeout)?;
        Ok(easy)
    }
}

impl Fetcher for CurlFetcher {
    fn get_page(&self, url: &str) -> Result<String, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = self.easy(url, self.page_timeout)?;
        // Empty string: accept every encoding libcurl can decode.
        easy.accept_encoding("")?;
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if !(200..300).contains(&status) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn head_status(&self, url: &str) -> Result<u32, FetchError> {
        let mut easy = self.easy(url, self.probe_timeout)?;
        easy.nobody(true)?; // HEAD request
        easy.perform()?;
        Ok(easy.response_code()?)
    }
}
