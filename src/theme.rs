//! Blog theme - per-page-load context and page dispatcher

use crate::config::SiteConfig;
use crate::content::{Post, PostStore};
use crate::dom::Document;
use crate::error::ThemeError;
use crate::location::Location;
use crate::{meta, render, Site};

/// Id of the grid container on listing pages
pub const POSTS_CONTAINER_ID: &str = "posts-container";
/// Id of the content container on single-post pages
pub const SINGLE_POST_ID: &str = "single-post-content";

/// State of one page load: the loaded posts and the site configuration
///
/// Built once per page load and passed to everything that renders.
#[derive(Debug, Clone)]
pub struct BlogTheme {
    config: SiteConfig,
    posts: PostStore,
}

impl BlogTheme {
    pub fn new(config: SiteConfig, posts: PostStore) -> Self {
        Self { config, posts }
    }

    /// Load the posts document relative to `location`
    ///
    /// Never fails: an unresolvable or unreadable document leaves the theme
    /// with an empty store.
    pub async fn init(site: &Site, location: &Location) -> Self {
        let posts = match location.join(&site.config.data_path) {
            Ok(url) => PostStore::load(site, &url).await,
            Err(e) => {
                tracing::warn!(
                    "Error loading posts: bad data path {:?}: {}",
                    site.config.data_path,
                    e
                );
                PostStore::default()
            }
        };

        Self::new(site.config.clone(), posts)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn posts(&self) -> &PostStore {
        &self.posts
    }

    /// Render the page: single-post view on post pages, grid otherwise
    pub fn handle_page_load<D: Document>(&self, doc: &mut D, location: &Location) {
        if location.is_single_post(&self.config.post_page) {
            tracing::debug!("Single-post page: {}", location);
            self.load_single_post(doc, location);
        } else {
            tracing::debug!("Listing page: {}", location);
            self.load_posts_grid(doc);
        }
    }

    /// Fill the grid container with one card per post
    ///
    /// Leaves the container untouched when there are no posts.
    pub fn load_posts_grid<D: Document>(&self, doc: &mut D) {
        if self.posts.is_empty() {
            tracing::debug!("No posts to list");
            return;
        }

        let cards = render::posts_grid(&self.config, &self.posts);
        if !doc.set_inner_html(POSTS_CONTAINER_ID, &cards) {
            tracing::debug!("No #{} element, grid skipped", POSTS_CONTAINER_ID);
        }
    }

    /// The post named by the `slug` query parameter
    pub fn find_requested_post(&self, location: &Location) -> Result<&Post, ThemeError> {
        let slug = location.search_param("slug");
        slug.as_deref()
            .and_then(|slug| self.posts.find(slug))
            .ok_or(ThemeError::PostNotFound { slug })
    }

    /// Render the requested post and update the page head, or show the
    /// not-found view
    pub fn load_single_post<D: Document>(&self, doc: &mut D, location: &Location) {
        match self.find_requested_post(location) {
            Ok(post) => {
                meta::update_page_metadata(doc, post, location.href());
                self.render_single_post(doc, post, location);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.show_post_not_found(doc);
            }
        }
    }

    fn render_single_post<D: Document>(&self, doc: &mut D, post: &Post, location: &Location) {
        let content = render::single_post(&self.config, post);
        if !doc.set_inner_html(SINGLE_POST_ID, &content) {
            tracing::debug!("No #{} element, post not rendered", SINGLE_POST_ID);
            return;
        }

        meta::update_schema_markup(doc, post, location.href());
    }

    fn show_post_not_found<D: Document>(&self, doc: &mut D) {
        doc.set_inner_html(SINGLE_POST_ID, &render::post_not_found(&self.config));
    }
}
