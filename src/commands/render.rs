//! Load a page and write out the rendered result

use anyhow::{Context, Result};
use std::path::Path;

use crate::dom::HtmlDocument;
use crate::{BlogTheme, Site};

/// Load `page` with the given query string and return the rendered HTML
pub async fn render_page(site: &Site, page: &str, query: Option<&str>) -> Result<String> {
    let location = site.location_for(page, query)?;
    let path = site
        .resolve_url(location.url())
        .with_context(|| format!("Page {} is outside the site directory", location))?;

    let html = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read page {:?}", path))?;

    let theme = BlogTheme::init(site, &location).await;
    let mut doc = HtmlDocument::new(html);
    theme.handle_page_load(&mut doc, &location);

    Ok(doc.into_string())
}

/// Render a page to `output`, or to stdout when no output is given
pub async fn run(site: &Site, page: &str, query: Option<&str>, output: Option<&Path>) -> Result<()> {
    let start = std::time::Instant::now();
    let html = render_page(site, page, query).await?;

    match output {
        Some(output) => {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(output, &html)
                .await
                .with_context(|| format!("Failed to write {:?}", output))?;
            tracing::info!("Wrote {:?}", output);
        }
        None => println!("{}", html),
    }

    let duration = start.elapsed();
    tracing::debug!("Rendered {} in {:.2}ms", page, duration.as_secs_f64() * 1000.0);

    Ok(())
}
