//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // URL
    /// Public address of the site directory; pages are opened relative to it
    pub url: String,

    // Directory
    /// Directory holding the pages, relative to the base directory
    pub source_dir: String,

    // Data
    /// Location of the posts document, relative to the page being loaded
    pub data_path: String,

    // Pages
    /// Path fragment identifying single-post pages
    pub post_page: String,
    /// Target of the "back to home" link on the not-found view
    pub index_page: String,

    // Date format
    pub date_format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:4000/".to_string(),
            source_dir: ".".to_string(),
            data_path: "../data/posts.json".to_string(),
            post_page: "post.html".to_string(),
            index_page: "index.html".to_string(),
            date_format: "MMMM D, YYYY".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}
