//! List the posts a page would see

use anyhow::Result;

use crate::helpers::format_post_date;
use crate::{BlogTheme, Site};

/// Print the posts loaded for `page`, in store order
pub async fn run(site: &Site, page: &str) -> Result<()> {
    let location = site.location_for(page, None)?;
    let theme = BlogTheme::init(site, &location).await;
    let posts = theme.posts();

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {} - {} [{}]",
            format_post_date(&post.date, "YYYY-MM-DD"),
            post.title,
            post.slug
        );
    }

    Ok(())
}
