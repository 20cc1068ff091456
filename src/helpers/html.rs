//! HTML helper functions

use std::borrow::Cow;

/// Escape HTML special characters
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Examples
/// ```ignore
/// html_escape("<b>") // -> "&lt;b&gt;"
/// ```
pub fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Make JSON safe to embed as the text of a `<script>` element
///
/// `<` is the only character that can end the element or open a comment
/// inside it, so it is replaced by its JSON unicode escape.
pub fn script_safe_json(json: &str) -> Cow<'_, str> {
    if json.contains('<') {
        Cow::Owned(json.replace('<', "\\u003c"))
    } else {
        Cow::Borrowed(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert!(matches!(html_escape("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_script_safe_json() {
        assert_eq!(
            script_safe_json(r#"{"a":"</script>"}"#),
            r#"{"a":"\u003c/script>"}"#
        );
        assert!(matches!(script_safe_json("{}"), Cow::Borrowed("{}")));
    }
}
