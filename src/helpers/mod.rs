//! Helper functions shared by the renderers
//!
//! Escaping, URL building and date formatting used when turning post
//! records into markup.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use self::url::*;
