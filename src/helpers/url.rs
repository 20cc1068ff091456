//! URL helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

/// Characters left as-is in a query component (RFC 3986 unreserved set)
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a value for use inside a query string
///
/// # Examples
/// ```ignore
/// encode_query_component("mac & cheese") // -> "mac%20%26%20cheese"
/// ```
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

/// Link to a single-post page for the given slug
///
/// # Examples
/// ```ignore
/// post_url("post.html", "pasta") // -> "post.html?slug=pasta"
/// ```
pub fn post_url(post_page: &str, slug: &str) -> String {
    format!("{}?slug={}", post_page, encode_query_component(slug))
}

/// Decode a percent-encoded URL path
pub fn decode_path(path: &str) -> Cow<'_, str> {
    percent_decode_str(path).decode_utf8_lossy()
}
