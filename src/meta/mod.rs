//! Metadata updater - page head and structured data for a single post

mod schema;

pub use schema::BlogPosting;

use crate::content::Post;
use crate::dom::{Document, Node};
use crate::helpers::script_safe_json;

pub const TITLE_ID: &str = "page-title";
pub const DESCRIPTION_ID: &str = "page-description";
pub const SCHEMA_ID: &str = "schema-data";

/// Point the page title, description and canonical link at `post`
pub fn update_page_metadata<D: Document>(doc: &mut D, post: &Post, url: &str) {
    if !doc.set_text_content(TITLE_ID, &post.title) {
        tracing::debug!("No #{} element, title left unchanged", TITLE_ID);
    }
    if !doc.set_attribute(DESCRIPTION_ID, "content", &post.excerpt) {
        tracing::debug!("No #{} element, description left unchanged", DESCRIPTION_ID);
    }
    if !doc.set_canonical_link(url) {
        tracing::debug!("No document head, canonical link not added");
    }
}

/// Write the `BlogPosting` block for `post` into the schema element
pub fn update_schema_markup<D: Document>(doc: &mut D, post: &Post, url: &str) {
    let json = match serde_json::to_string(&BlogPosting::new(post, url)) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to serialize structured data: {}", e);
            return;
        }
    };

    let content = [Node::Raw(script_safe_json(&json).into_owned())];
    if !doc.set_inner_html(SCHEMA_ID, &content) {
        tracing::debug!("No #{} element, structured data skipped", SCHEMA_ID);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlDocument;

    const HEAD: &str = r#"<html><head><title id="page-title">Blog</title><meta name="description" id="page-description" content=""><script type="application/ld+json" id="schema-data"></script></head><body></body></html>"#;

    fn post() -> Post {
        Post {
            slug: "soup".to_string(),
            title: "Tomato Soup".to_string(),
            excerpt: "Quick & easy".to_string(),
            image: "/images/soup.jpg".to_string(),
            date: "2024-02-03".to_string(),
            ..Post::default()
        }
    }

    #[test]
    fn test_update_page_metadata() {
        let mut doc = HtmlDocument::new(HEAD);
        let url = "https://example.com/post.html?slug=soup";
        update_page_metadata(&mut doc, &post(), url);

        assert_eq!(doc.inner_html(TITLE_ID), Some("Tomato Soup"));
        assert_eq!(
            doc.attribute(DESCRIPTION_ID, "content").as_deref(),
            Some("Quick &amp; easy")
        );
        assert_eq!(doc.canonical_link().as_deref(), Some(url));
    }

    #[test]
    fn test_update_page_metadata_without_targets() {
        let mut doc = HtmlDocument::new("<p>no head</p>");
        update_page_metadata(&mut doc, &post(), "https://example.com/");
        assert_eq!(doc.as_str(), "<p>no head</p>");
    }

    #[test]
    fn test_update_schema_markup() {
        let mut doc = HtmlDocument::new(HEAD);
        let mut post = post();
        post.title = "</script><script>alert(1)</script>".to_string();
        update_schema_markup(&mut doc, &post, "https://example.com/post.html?slug=soup");

        let json = doc.inner_html(SCHEMA_ID).unwrap();
        assert!(!json.contains("</script>"));
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["@type"], "BlogPosting");
        assert_eq!(value["headline"], "</script><script>alert(1)</script>");
        assert_eq!(value["publisher"]["name"], "Universal Blog");
    }
}
