//! blog-theme: headless page loads for a JSON-driven blog theme
//!
//! A page is opened at a URL, the posts document is loaded relative to it,
//! and the page is filled in either as a grid of post cards or as a single
//! post with its SEO metadata.

pub mod commands;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod helpers;
pub mod location;
pub mod meta;
pub mod render;
pub mod theme;

pub use error::ThemeError;
pub use location::Location;
pub use theme::BlogTheme;

use anyhow::Result;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// A site on disk and the address it is published at
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory served at `config.url`
    pub source_dir: PathBuf,
}

impl Site {
    /// Open the site in a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
        })
    }

    /// Configured site URL, always ending in a slash
    pub fn base_url(&self) -> Result<Url, ThemeError> {
        let mut url = Url::parse(&self.config.url)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// Location of a page of this site, with an optional query string
    pub fn location_for(&self, page: &str, query: Option<&str>) -> Result<Location, ThemeError> {
        let mut url = self.base_url()?.join(page.trim_start_matches('/'))?;
        url.set_query(query.filter(|q| !q.is_empty()));
        Ok(Location::new(url))
    }

    /// File backing a URL, if the URL belongs to this site
    ///
    /// `file:` URLs map straight to their path; other URLs must share the
    /// origin of the site URL and lie below its path.
    pub fn resolve_url(&self, url: &Url) -> Option<PathBuf> {
        if url.scheme() == "file" {
            return url.to_file_path().ok();
        }

        let base = self.base_url().ok()?;
        if url.origin() != base.origin() {
            return None;
        }

        let relative = url.path().strip_prefix(base.path())?;
        let relative = helpers::decode_path(relative);
        let relative = Path::new(relative.as_ref());
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }

        Some(self.source_dir.join(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site(url: &str) -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            format!("url: {}\nsource_dir: public\n", url),
        )
        .unwrap();
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    #[test]
    fn test_new_reads_config() {
        let (dir, site) = site("https://example.com/blog");
        assert_eq!(site.source_dir, dir.path().join("public"));
        assert_eq!(site.base_url().unwrap().as_str(), "https://example.com/blog/");
    }

    #[test]
    fn test_new_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.url, "http://localhost:4000/");
    }

    #[test]
    fn test_location_for() {
        let (_dir, site) = site("https://example.com/blog/");
        let location = site.location_for("/post.html", Some("slug=soup")).unwrap();
        assert_eq!(location.href(), "https://example.com/blog/post.html?slug=soup");

        let location = site.location_for("index.html", Some("")).unwrap();
        assert_eq!(location.href(), "https://example.com/blog/index.html");
    }

    #[test]
    fn test_resolve_url() {
        let (dir, site) = site("https://example.com/blog/");
        let public = dir.path().join("public");

        let url = Url::parse("https://example.com/blog/data/my%20posts.json").unwrap();
        assert_eq!(site.resolve_url(&url), Some(public.join("data/my posts.json")));

        let outside = Url::parse("https://example.com/other/posts.json").unwrap();
        assert_eq!(site.resolve_url(&outside), None);

        let foreign = Url::parse("https://cdn.example.com/blog/posts.json").unwrap();
        assert_eq!(site.resolve_url(&foreign), None);

        let escaping = Url::parse("https://example.com/blog/..%2F..%2Fsecret.json").unwrap();
        assert_eq!(site.resolve_url(&escaping), None);
    }
}
