//! In-memory `Fetcher` for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::{FetchError, Fetcher};

/// CURLE_COULDNT_CONNECT, the error libcurl reports for a refused connection.
fn connection_refused() -> curl::Error {
    curl::Error::new(7)
}

#[derive(Debug, Default)]
pub(crate) struct FakeWeb {
    pages: HashMap<String, String>,
    files: HashSet<String>,
    down: HashSet<String>,
    gets: RefCell<Vec<String>>,
    heads: RefCell<Vec<String>>,
}

impl FakeWeb {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for GET `url`.
    pub(crate) fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    /// Answer HEAD `url` with 200.
    pub(crate) fn file(mut self, url: &str) -> Self {
        self.files.insert(url.to_string());
        self
    }

    /// Fail every request to `url` with a connection error.
    pub(crate) fn unreachable(mut self, url: &str) -> Self {
        self.down.insert(url.to_string());
        self
    }

    pub(crate) fn was_probed(&self, url: &str) -> bool {
        self.heads.borrow().iter().any(|u| u == url)
    }

    pub(crate) fn request_count(&self) -> usize {
        self.gets.borrow().len() + self.heads.borrow().len()
    }
}

impl Fetcher for FakeWeb {
    fn get_page(&self, url: &str) -> Result<String, FetchError> {
        self.gets.borrow_mut().push(url.to_string());
        if self.down.contains(url) {
            return Err(connection_refused().into());
        }
        self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: 404,
        })
    }

    fn head_status(&self, url: &str) -> Result<u32, FetchError> {
        self.heads.borrow_mut().push(url.to_string());
        if self.down.contains(url) {
            return Err(connection_refused().into());
        }
        Ok(if self.files.contains(url) { 200 } else { 404 })
    }
}
