//! In-memory HTML page
//!
//! Elements are located by scanning the markup tag by tag rather than
//! building a full tree: only the opening tag carrying the requested id and
//! its matching closing tag are ever looked at, and everything else is kept
//! byte for byte. Comments and the bodies of raw-text elements are skipped
//! while scanning.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::ops::Range;

use super::node::{element, render_nodes, Node, VOID_ELEMENTS};
use super::Document;
use crate::helpers::html_escape;

/// Elements whose content is text up to the first matching closing tag
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Elements that may appear in a head whose tags were left out
const HEAD_ELEMENTS: &[&str] = &[
    "html", "head", "title", "meta", "link", "style", "script", "base", "noscript", "template",
];

lazy_static! {
    /// A comment, a declaration, or an opening or closing tag. Group 1 holds
    /// the slash of a closing tag and group 2 the tag name.
    static ref MARKUP: Regex = Regex::new(
        r#"(?s)<!--.*?(?:-->|\z)|<[!?][^>]*>?|<(/?)([a-zA-Z][a-zA-Z0-9:-]*)(?:\s*[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?|\s*/)*\s*>"#
    )
    .unwrap();
    static ref ATTRIBUTE: Regex =
        Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#).unwrap();
}

/// An opening or closing tag found in the page
#[derive(Debug)]
struct Tag {
    /// Lowercased tag name
    name: String,
    closing: bool,
    self_closing: bool,
    /// `<` through `>`
    range: Range<usize>,
}

/// Iterator over the tags of a page, starting at a byte offset
struct Tags<'a> {
    html: &'a str,
    pos: usize,
}

fn tags(html: &str, from: usize) -> Tags<'_> {
    Tags { html, pos: from }
}

impl Iterator for Tags<'_> {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        loop {
            let caps = MARKUP.captures_at(self.html, self.pos)?;
            let m = caps.get(0)?;
            self.pos = m.end();

            // comments and declarations
            let Some(name) = caps.get(2) else {
                continue;
            };

            let tag = Tag {
                name: name.as_str().to_ascii_lowercase(),
                closing: caps.get(1).is_some_and(|slash| !slash.as_str().is_empty()),
                self_closing: m.as_str().ends_with("/>"),
                range: m.range(),
            };

            if !tag.closing && !tag.self_closing && RAW_TEXT_ELEMENTS.contains(&tag.name.as_str())
            {
                self.pos = raw_text_end(self.html, &tag.name, self.pos);
            }

            return Some(tag);
        }
    }
}

/// Byte offset of the tag closing a raw-text element whose content starts at
/// `from`, or the end of the page when it is never closed
fn raw_text_end(html: &str, name: &str, from: usize) -> usize {
    let close = format!("</{}", name);
    html[from..]
        .to_ascii_lowercase()
        .find(&close)
        .map_or(html.len(), |offset| from + offset)
}

/// Location of an element inside the page
#[derive(Debug)]
struct ElementSpan {
    /// The opening tag, `<` through `>`
    open: Range<usize>,
    /// Content between the opening and closing tags; `None` for void and
    /// unterminated elements
    inner: Option<Range<usize>>,
}

/// A page held as HTML text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    html: String,
}

impl HtmlDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// Markup between the opening and closing tags of the element with `id`
    pub fn inner_html(&self, id: &str) -> Option<&str> {
        let span = self.find_element(id)?;
        span.inner.map(|inner| &self.html[inner])
    }

    /// Value of an attribute on the element with `id`, as written in the page
    pub fn attribute(&self, id: &str, name: &str) -> Option<String> {
        let span = self.find_element(id)?;
        attribute_value(&self.html[span.open], name)
    }

    /// `href` of the first `link[rel=canonical]`
    pub fn canonical_link(&self) -> Option<String> {
        let tag = self.find_canonical()?;
        attribute_value(&self.html[tag], "href")
    }

    fn find_canonical(&self) -> Option<Range<usize>> {
        tags(&self.html, 0)
            .filter(|tag| !tag.closing && tag.name == "link")
            .find(|tag| {
                attribute_value(&self.html[tag.range.clone()], "rel").is_some_and(|rel| {
                    rel.split_ascii_whitespace()
                        .any(|token| token.eq_ignore_ascii_case("canonical"))
                })
            })
            .map(|tag| tag.range)
    }

    /// Where a new element of the head goes: before `</head>`, or where an
    /// omitted head would have ended
    fn head_insertion_point(&self) -> usize {
        let mut implied_end = None;
        for tag in tags(&self.html, 0) {
            if tag.closing && tag.name == "head" {
                return tag.range.start;
            }
            if implied_end.is_none()
                && !tag.closing
                && (tag.name == "body" || !HEAD_ELEMENTS.contains(&tag.name.as_str()))
            {
                implied_end = Some(tag.range.start);
            }
        }

        implied_end.unwrap_or(self.html.len())
    }

    fn find_element(&self, id: &str) -> Option<ElementSpan> {
        let open = tags(&self.html, 0).find(|tag| {
            !tag.closing
                && attribute_value(&self.html[tag.range.clone()], "id").as_deref() == Some(id)
        })?;

        let inner = if VOID_ELEMENTS.contains(&open.name.as_str()) || open.self_closing {
            None
        } else {
            self.find_closing_tag(&open.name, open.range.end)
                .map(|close| open.range.end..close)
        };

        Some(ElementSpan {
            open: open.range,
            inner,
        })
    }

    /// Byte offset of the tag closing an element of type `name` opened just
    /// before `from`
    fn find_closing_tag(&self, name: &str, from: usize) -> Option<usize> {
        if RAW_TEXT_ELEMENTS.contains(&name) {
            let end = raw_text_end(&self.html, name, from);
            return (end < self.html.len()).then_some(end);
        }

        let mut depth = 1usize;
        for tag in tags(&self.html, from).filter(|tag| tag.name == name) {
            if tag.closing {
                depth -= 1;
                if depth == 0 {
                    return Some(tag.range.start);
                }
            } else if !tag.self_closing {
                depth += 1;
            }
        }

        None
    }
}

impl Document for HtmlDocument {
    fn set_inner_html(&mut self, id: &str, content: &[Node]) -> bool {
        let Some(inner) = self.find_element(id).and_then(|span| span.inner) else {
            return false;
        };

        self.html.replace_range(inner, &render_nodes(content));
        true
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool {
        let Some(span) = self.find_element(id) else {
            return false;
        };

        let updated = with_attribute(&self.html[span.open.clone()], name, value);
        self.html.replace_range(span.open, &updated);
        true
    }

    fn set_canonical_link(&mut self, href: &str) -> bool {
        if let Some(tag) = self.find_canonical() {
            let updated = with_attribute(&self.html[tag.clone()], "href", href);
            self.html.replace_range(tag, &updated);
            return true;
        }

        let link: Node = element("link")
            .attr("rel", "canonical")
            .attr("href", href)
            .into();
        let at = self.head_insertion_point();
        self.html.insert_str(at, &link.to_string());
        true
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

impl From<String> for HtmlDocument {
    fn from(html: String) -> Self {
        Self::new(html)
    }
}

/// Attributes of an opening tag: the span of each `name=value` pair within
/// the tag, the lowercased name and the value as written
fn attributes(tag: &str) -> impl Iterator<Item = (Range<usize>, String, &str)> + '_ {
    let start = tag
        .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
        .unwrap_or(tag.len());

    ATTRIBUTE.captures_iter(&tag[start..]).filter_map(move |caps| {
        let m = caps.get(0)?;
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or("", |v| v.as_str());
        Some((
            start + m.start()..start + m.end(),
            caps[1].to_ascii_lowercase(),
            value,
        ))
    })
}

fn attribute_value(tag: &str, name: &str) -> Option<String> {
    attributes(tag)
        .find(|(_, attr, _)| attr.eq_ignore_ascii_case(name))
        .map(|(_, _, value)| value.to_string())
}

/// Rewrite an opening tag so that attribute `name` holds `value`
fn with_attribute(tag: &str, name: &str, value: &str) -> String {
    let value = html_escape(value);

    if let Some((span, _, _)) = attributes(tag).find(|(_, attr, _)| attr.eq_ignore_ascii_case(name))
    {
        let mut updated = tag.to_string();
        updated.replace_range(span, &format!(r#"{}="{}""#, name, value));
        return updated;
    }

    let end = if tag.ends_with("/>") {
        tag.len() - 2
    } else {
        tag.len() - 1
    };
    format!(
        r#"{} {}="{}"{}"#,
        tag[..end].trim_end(),
        name,
        value,
        &tag[end..]
    )
}
