//! CLI entry point for blog-theme

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_theme::helpers::encode_query_component;

#[derive(Parser)]
#[command(name = "blog-theme")]
#[command(version)]
#[command(about = "Render blog pages from a JSON posts document", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a page and print or save the rendered HTML
    #[command(alias = "r")]
    Render {
        /// Page to open, relative to the site directory
        page: String,

        /// Slug of the post to show on a single-post page
        #[arg(short, long, conflicts_with = "query")]
        slug: Option<String>,

        /// Raw query string to open the page with
        #[arg(short, long)]
        query: Option<String>,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the posts loaded for a page
    List {
        /// Page whose location the posts document is resolved against
        #[arg(short, long, default_value = "index.html")]
        page: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_theme=debug,info"
    } else {
        "blog_theme=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Render {
            page,
            slug,
            query,
            output,
        } => {
            let site = blog_theme::Site::new(&base_dir)?;
            let query = slug
                .map(|slug| format!("slug={}", encode_query_component(&slug)))
                .or(query);
            tracing::info!("Rendering {}", page);
            blog_theme::commands::render::run(&site, &page, query.as_deref(), output.as_deref())
                .await?;
        }

        Commands::List { page } => {
            let site = blog_theme::Site::new(&base_dir)?;
            blog_theme::commands::list::run(&site, &page).await?;
        }

        Commands::Version => {
            println!("blog-theme version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
