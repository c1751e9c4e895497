//! Address checks and the scheme/authority split used by every stage.

/// A catalog address that passed the `http://` / `https://` check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    address: String,
    scheme: &'static str,
    netloc: String,
}

impl Site {
    /// Returns `None` for empty addresses and anything that is not plain http(s).
    pub fn parse(address: &str) -> Option<Self> {
        let (scheme, rest) = if let Some(rest) = address.strip_prefix("https://") {
            ("https", rest)
        } else if let Some(rest) = address.strip_prefix("http://") {
            ("http", rest)
        } else {
            return None;
        };
        let end = rest.find(|c: char| matches!(c, '/' | '?' | '#')).unwrap_or(rest.len());
        Some(Self {
            address: address.to_string(),
            scheme,
            netloc: rest[..end].to_string(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn scheme(&self) -> &str {
        self.scheme
    }

    /// Authority part of the address (`host[:port]`, userinfo included if present).
    pub fn netloc(&self) -> &str {
        &self.netloc
    }

    /// `{scheme}://{netloc}`
    pub fn base(&self) -> String {
        format!("{}://{}", self.scheme, self.netloc)
    }
}
