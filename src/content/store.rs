//! Post store - the list of posts loaded once per page load

use serde::Deserialize;
use url::Url;

use super::Post;
use crate::error::ThemeError;
use crate::Site;

/// Top-level shape of the posts document
#[derive(Debug, Default, Deserialize)]
struct PostsDocument {
    #[serde(default)]
    posts: Vec<Post>,
}

/// Ordered, read-only collection of posts
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Create a store from already loaded posts
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Parse a posts document
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let document: PostsDocument = serde_json::from_str(json)?;
        Ok(Self::new(document.posts))
    }

    /// Fetch and parse the posts document at `url`
    pub async fn fetch(site: &Site, url: &Url) -> Result<Self, ThemeError> {
        let path = site
            .resolve_url(url)
            .ok_or_else(|| ThemeError::Unreachable(url.to_string()))?;

        let json = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ThemeError::Fetch {
                url: url.to_string(),
                source,
            })?;

        Self::from_json(&json)
    }

    /// Load the posts document at `url`, falling back to an empty store
    pub async fn load(site: &Site, url: &Url) -> Self {
        match Self::fetch(site, url).await {
            Ok(store) => {
                tracing::info!("Loaded {} posts from {}", store.len(), url);
                store
            }
            Err(e) => {
                tracing::warn!("Error loading posts: {}", e);
                Self::default()
            }
        }
    }

    /// First post with the given slug
    pub fn find(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl<'a> IntoIterator for &'a PostStore {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const THREE_POSTS: &str = r#"{"posts": [
        {"slug": "first", "title": "First"},
        {"slug": "second", "title": "Second"},
        {"slug": "third", "title": "Third"}
    ]}"#;

    fn site_with_data(json: Option<&str>) -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        if let Some(json) = json {
            fs::write(dir.path().join("data/posts.json"), json).unwrap();
        }
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    fn data_url(site: &Site) -> Url {
        site.base_url().unwrap().join("data/posts.json").unwrap()
    }

    #[test]
    fn test_from_json_preserves_order() {
        let store = PostStore::from_json(THREE_POSTS).unwrap();
        assert_eq!(store.len(), 3);
        let slugs: Vec<_> = store.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["first", "second", "third"]);
    }

    #[test]
    fn test_missing_posts_key_is_empty() {
        let store = PostStore::from_json("{}").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_find_returns_first_match() {
        let store = PostStore::from_json(
            r#"{"posts": [{"slug": "dup", "title": "One"}, {"slug": "dup", "title": "Two"}]}"#,
        )
        .unwrap();
        assert_eq!(store.find("dup").unwrap().title, "One");
        assert!(store.find("missing").is_none());
    }

    #[test]
    fn test_loosely_typed_record_keeps_the_store() {
        let store = PostStore::from_json(
            r#"{"posts": [
                {"slug": "a", "title": null, "content": {"ingredients": ["2 eggs", 3]}},
                {"slug": "b", "title": "B"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.find("a").unwrap().title, "");
        assert_eq!(store.find("b").unwrap().title, "B");
    }

    #[tokio::test]
    async fn test_load_from_site() {
        let (_dir, site) = site_with_data(Some(THREE_POSTS));
        let store = PostStore::load(&site, &data_url(&site)).await;
        assert_eq!(store.len(), 3);
        assert_eq!(store.iter().nth(2).unwrap().title, "Third");
    }

    #[tokio::test]
    async fn test_malformed_document_loads_empty() {
        let (_dir, site) = site_with_data(Some(r#"{"posts": [ {"slug": "#));
        let url = data_url(&site);
        assert!(matches!(
            PostStore::fetch(&site, &url).await,
            Err(ThemeError::Parse(_))
        ));
        assert!(PostStore::load(&site, &url).await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_document_loads_empty() {
        let (_dir, site) = site_with_data(None);
        let url = data_url(&site);
        assert!(matches!(
            PostStore::fetch(&site, &url).await,
            Err(ThemeError::Fetch { .. })
        ));
        assert!(PostStore::load(&site, &url).await.is_empty());
    }

    #[tokio::test]
    async fn test_foreign_origin_is_unreachable() {
        let (_dir, site) = site_with_data(Some(THREE_POSTS));
        let url = Url::parse("https://elsewhere.example/data/posts.json").unwrap();
        assert!(matches!(
            PostStore::fetch(&site, &url).await,
            Err(ThemeError::Unreachable(_))
        ));
        assert!(PostStore::load(&site, &url).await.is_empty());
    }
}
