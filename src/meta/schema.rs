//! schema.org structured data

use serde::Serialize;

use crate::content::Post;

const AUTHOR_NAME: &str = "Author Name";
const PUBLISHER_NAME: &str = "Universal Blog";
const PUBLISHER_LOGO: &str = "/images/logo.png";

/// `BlogPosting` structured data for one post
#[derive(Debug, Serialize)]
pub struct BlogPosting<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: &'a str,
    pub description: &'a str,
    #[serde(rename = "datePublished")]
    pub date_published: &'a str,
    #[serde(rename = "dateModified")]
    pub date_modified: &'a str,
    pub author: Person,
    pub publisher: Organization,
    pub image: &'a str,
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub logo: ImageObject,
}

#[derive(Debug, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: &'static str,
}

impl<'a> BlogPosting<'a> {
    /// Structured data for `post` published at `url`
    ///
    /// Author and publisher are fixed placeholders.
    pub fn new(post: &'a Post, url: &'a str) -> Self {
        Self {
            context: "https://schema.org",
            kind: "BlogPosting",
            headline: &post.title,
            description: &post.excerpt,
            date_published: &post.date,
            date_modified: &post.date,
            author: Person {
                kind: "Person",
                name: AUTHOR_NAME,
            },
            publisher: Organization {
                kind: "Organization",
                name: PUBLISHER_NAME,
                logo: ImageObject {
                    kind: "ImageObject",
                    url: PUBLISHER_LOGO,
                },
            },
            image: &post.image,
            url,
        }
    }
}
