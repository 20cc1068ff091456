//! Error types for page loading

use thiserror::Error;

/// Failures recognised while loading a page.
///
/// None of these abort a page load: the dispatcher logs them and falls back
/// to an empty store or the not-found view.
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unreachable resource: {0}")]
    Unreachable(String),

    #[error("Invalid posts document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Post not found: {}", .slug.as_deref().unwrap_or("<no slug>"))]
    PostNotFound { slug: Option<String> },
}
