//! Address of the page being loaded

use std::fmt;
use url::Url;

/// The URL a page was opened at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(href: &str) -> Result<Self, url::ParseError> {
        Url::parse(href).map(Self::new)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Full address, used for the canonical link and structured data
    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    pub fn pathname(&self) -> &str {
        self.url.path()
    }

    /// First value of a query parameter, treated as absent when empty
    pub fn search_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    }

    /// Resolve a reference relative to this page
    pub fn join(&self, reference: &str) -> Result<Url, url::ParseError> {
        self.url.join(reference)
    }

    /// Whether this is a single-post page, i.e. its path contains `marker`
    pub fn is_single_post(&self, marker: &str) -> bool {
        self.pathname().contains(marker)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}
