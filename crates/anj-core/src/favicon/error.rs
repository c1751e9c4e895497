//! Page fetch error type.

/// Failure while fetching a page. During page inspection any of
/// these abandons the probe chain and the fallback service is used instead.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// libcurl reported an error (timeout, connection refused, DNS, TLS...).
    #[error(transparent)]
    Transport(#[from] curl::Error),
    /// Final response after redirects was not 2xx.
    #[error("HTTP {status} for url: {url}")]
    Status { url: String, status: u32 },
    /// The address could not be parsed as a base for relative references.
    #[error("invalid URL {url}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
