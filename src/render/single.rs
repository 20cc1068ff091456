//! Single-post view

use crate::config::SiteConfig;
use crate::content::{ContentItem, Post};
use crate::dom::{element, Element, Node};
use crate::helpers::format_post_date;

/// Full view of one post: image, title, meta line, advertisement slot, body,
/// advertisement slot
pub fn single_post(config: &SiteConfig, post: &Post) -> Vec<Node> {
    let mut nodes: Vec<Node> = vec![
        element("img")
            .attr("src", &post.image)
            .attr("alt", &post.title)
            .class("post-image")
            .attr("loading", "lazy")
            .into(),
        element("h1")
            .class("post-title")
            .child(post.title.as_str())
            .into(),
        post_meta(config, post).into(),
        ad_placeholder().into(),
    ];
    nodes.extend(post_body(post));
    nodes.push(ad_placeholder().into());
    nodes
}

/// Date and category line
fn post_meta(config: &SiteConfig, post: &Post) -> Element {
    element("div")
        .class("post-meta")
        .child(element("span").class("post-date").child(format!(
            "📅 {}",
            format_post_date(&post.date, &config.date_format)
        )))
        .child(
            element("span")
                .class("post-category")
                .child(format!("🏷️ {}", post.category)),
        )
}

/// Empty advertisement slot
pub fn ad_placeholder() -> Element {
    element("div")
        .class("ad-content")
        .child(element("div").class("ad-label").child("Advertisement"))
        .child(Node::comment("AdSense code will go here"))
}

/// Body entries in order, with markers expanded into their lists
pub fn post_body(post: &Post) -> Vec<Node> {
    let content = post.content.as_ref();
    let mut nodes = Vec::new();

    for item in post.paragraphs() {
        match item {
            ContentItem::Text(text) => {
                nodes.push(element("p").child(text.as_str()).into());
            }
            ContentItem::Ingredients => {
                match content.and_then(|c| c.ingredients.as_deref()) {
                    Some(items) => {
                        nodes.push(element("h3").child("Ingredients:").into());
                        nodes.push(list("ul", items).into());
                    }
                    None => tracing::debug!("Post {:?} has no ingredients to list", post.slug),
                }
            }
            ContentItem::Steps => match content.and_then(|c| c.steps.as_deref()) {
                Some(items) => {
                    nodes.push(element("h3").child("Steps:").into());
                    nodes.push(list("ol", items).into());
                }
                None => tracing::debug!("Post {:?} has no steps to list", post.slug),
            },
        }
    }

    nodes
}

fn list(tag: &'static str, items: &[String]) -> Element {
    element(tag).children(items.iter().map(|item| element("li").child(item.as_str())))
}

/// Placeholder shown when the requested post does not exist
pub fn post_not_found(config: &SiteConfig) -> Vec<Node> {
    vec![element("div")
        .class("text-center")
        .child(element("h2").child("Post Not Found"))
        .child(element("p").child("The requested post could not be found."))
        .child(
            element("a")
                .attr("href", &config.index_page)
                .child("← Back to Home"),
        )
        .into()]
}
