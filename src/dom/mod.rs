//! Document model
//!
//! [`Document`] is the small slice of the browser DOM the theme needs:
//! look elements up by id and replace their content or attributes. Every
//! operation reports whether it found its target; a missing element is
//! never an error.

mod html;
mod node;

pub use html::HtmlDocument;
pub use node::{element, render_nodes, Element, Node};

/// Element-level access to a page
pub trait Document {
    /// Replace the children of the element with `id`
    fn set_inner_html(&mut self, id: &str, content: &[Node]) -> bool;

    /// Replace the children of the element with `id` by a single text node
    fn set_text_content(&mut self, id: &str, text: &str) -> bool {
        self.set_inner_html(id, &[Node::text(text)])
    }

    /// Set an attribute on the element with `id`
    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool;

    /// Point `link[rel=canonical]` at `href`, appending the link to the
    /// document head when the page has none
    fn set_canonical_link(&mut self, href: &str) -> bool;
}
