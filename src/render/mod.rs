//! Renderers - post records to markup trees
//!
//! Pure functions: they read posts and configuration and return nodes for
//! the dispatcher to place into the page.

mod grid;
mod single;

pub use grid::{post_card, posts_grid};
pub use single::{ad_placeholder, post_body, post_not_found, single_post};
