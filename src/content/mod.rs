//! Content module - post records and the store they are loaded into

mod post;
mod store;

pub use post::{ContentItem, Post, PostContent};
pub use store::PostStore;
