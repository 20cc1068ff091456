//! Grid view - one card per post

use crate::config::SiteConfig;
use crate::content::Post;
use crate::dom::{element, Element, Node};
use crate::helpers::{format_post_date, post_url};

/// Render every post as a card, in store order
pub fn posts_grid<'a, I>(config: &SiteConfig, posts: I) -> Vec<Node>
where
    I: IntoIterator<Item = &'a Post>,
{
    posts
        .into_iter()
        .map(|post| post_card(config, post).into())
        .collect()
}

/// Clickable card linking to the post's single-post page
pub fn post_card(config: &SiteConfig, post: &Post) -> Element {
    element("a")
        .attr("href", post_url(&config.post_page, &post.slug))
        .class("post-card")
        .child(
            element("img")
                .attr("src", &post.image)
                .attr("alt", &post.title)
                .class("post-card-image")
                .attr("loading", "lazy"),
        )
        .child(
            element("div")
                .class("post-card-content")
                .child(element("h3").class("post-card-title").child(post.title.as_str()))
                .child(element("p").class("post-card-excerpt").child(post.excerpt.as_str()))
                .child(
                    element("div")
                        .class("post-card-meta")
                        .child(
                            element("span")
                                .class("post-date")
                                .child(format_post_date(&post.date, &config.date_format)),
                        )
                        .child(
                            element("span")
                                .class("post-card-category")
                                .child(post.category.as_str()),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::render_nodes;

    fn post(slug: &str, title: &str) -> Post {
        Post {
            slug: slug.to_string(),
            title: title.to_string(),
            excerpt: "Short & sweet".to_string(),
            image: "/images/a.jpg".to_string(),
            category: "Recipes".to_string(),
            date: "2024-01-15".to_string(),
            content: None,
        }
    }

    #[test]
    fn test_post_card_markup() {
        let config = SiteConfig::default();
        let html = Node::from(post_card(&config, &post("pasta", "Pasta"))).to_string();
        assert_eq!(
            html,
            concat!(
                r#"<a href="post.html?slug=pasta" class="post-card">"#,
                r#"<img src="/images/a.jpg" alt="Pasta" class="post-card-image" loading="lazy">"#,
                r#"<div class="post-card-content">"#,
                r#"<h3 class="post-card-title">Pasta</h3>"#,
                r#"<p class="post-card-excerpt">Short &amp; sweet</p>"#,
                r#"<div class="post-card-meta">"#,
                r#"<span class="post-date">January 15, 2024</span>"#,
                r#"<span class="post-card-category">Recipes</span>"#,
                "</div></div></a>"
            )
        );
    }

    #[test]
    fn test_grid_keeps_store_order() {
        let config = SiteConfig::default();
        let posts = [post("b", "B"), post("a", "A"), post("c", "C")];
        let nodes = posts_grid(&config, &posts);
        let hrefs: Vec<_> = nodes
            .iter()
            .filter_map(Node::as_element)
            .filter_map(|el| el.attribute("href"))
            .collect();
        assert_eq!(
            hrefs,
            ["post.html?slug=b", "post.html?slug=a", "post.html?slug=c"]
        );
    }

    #[test]
    fn test_card_escapes_hostile_fields() {
        let config = SiteConfig::default();
        let mut hostile = post("x\" onclick=\"y", "<img src=x onerror=alert(1)>");
        hostile.image = "\" onerror=\"alert(1)".to_string();
        let html = render_nodes(&posts_grid(&config, [&hostile]));
        assert!(!html.contains("<img src=x"));
        assert!(!html.contains("\" onerror=\""));
        assert!(html.contains("post.html?slug=x%22%20onclick%3D%22y"));
    }
}
