//! Post model as found in the posts document

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A blog post
///
/// Every display field falls back to an empty string when the record omits
/// it or holds null, and numbers and booleans are shown as written, so a
/// sparse or loosely typed record still renders.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Identifier used for lookup and deep links
    #[serde(deserialize_with = "display_text")]
    pub slug: String,

    /// Post title
    #[serde(deserialize_with = "display_text")]
    pub title: String,

    /// Short summary shown on cards and in the description meta tag
    #[serde(deserialize_with = "display_text")]
    pub excerpt: String,

    /// Featured image URL
    #[serde(deserialize_with = "display_text")]
    pub image: String,

    /// Display category
    #[serde(deserialize_with = "display_text")]
    pub category: String,

    /// Publication date, ISO formatted
    #[serde(deserialize_with = "display_text")]
    pub date: String,

    /// Structured body
    #[serde(deserialize_with = "post_content")]
    pub content: Option<PostContent>,
}

impl Post {
    /// Body entries, or an empty slice when the post has none
    pub fn paragraphs(&self) -> &[ContentItem] {
        self.content
            .as_ref()
            .and_then(|c| c.paragraphs.as_deref())
            .unwrap_or_default()
    }
}

/// Body of a post
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PostContent {
    /// Ordered body entries
    #[serde(deserialize_with = "content_items")]
    pub paragraphs: Option<Vec<ContentItem>>,

    /// List rendered in place of an ingredient marker
    #[serde(deserialize_with = "text_list")]
    pub ingredients: Option<Vec<String>>,

    /// List rendered in place of a step marker
    #[serde(deserialize_with = "text_list")]
    pub steps: Option<Vec<String>>,
}

/// One entry of a post body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    /// Plain paragraph text
    Text(String),
    /// Position of the ingredients list
    Ingredients,
    /// Position of the steps list
    Steps,
}

/// Wire shape of a body entry before it is narrowed to [`ContentItem`]
#[derive(Deserialize)]
#[serde(untagged)]
enum RawItem {
    Text(String),
    Marker {
        #[serde(rename = "type")]
        kind: String,
    },
    Other(IgnoredAny),
}

/// Deserialize body entries, dropping the ones that are neither text nor a
/// known marker
fn content_items<'de, D>(deserializer: D) -> Result<Option<Vec<ContentItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<RawItem>> = Option::deserialize(deserializer)?;

    Ok(raw.map(|items| {
        items
            .into_iter()
            .filter_map(|item| match item {
                RawItem::Text(text) => Some(ContentItem::Text(text)),
                RawItem::Marker { kind } => match kind.as_str() {
                    "ingredient" => Some(ContentItem::Ingredients),
                    "step" => Some(ContentItem::Steps),
                    _ => {
                        tracing::warn!("Skipping content marker of unknown type {:?}", kind);
                        None
                    }
                },
                RawItem::Other(_) => {
                    tracing::warn!("Skipping content entry that is neither text nor a marker");
                    None
                }
            })
            .collect()
    }))
}

/// A JSON value as it would be shown on the page
enum Scalar {
    Text(String),
    Null,
    /// An array or object, which has no sensible text form
    Compound,
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any value")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Scalar, E> {
                Ok(Scalar::Text(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Scalar, E> {
                Ok(Scalar::Text(value))
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Scalar, E> {
                Ok(Scalar::Text(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Scalar, E> {
                Ok(Scalar::Text(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Scalar, E> {
                Ok(Scalar::Text(value.to_string()))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Scalar, E> {
                Ok(Scalar::Text(value.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Scalar, E> {
                Ok(Scalar::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<Scalar, E> {
                Ok(Scalar::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Scalar, D::Error>
            where
                D: Deserializer<'de>,
            {
                Scalar::deserialize(deserializer)
            }

            fn visit_seq<S>(self, mut seq: S) -> Result<Scalar, S::Error>
            where
                S: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Scalar::Compound)
            }

            fn visit_map<M>(self, mut map: M) -> Result<Scalar, M::Error>
            where
                M: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(Scalar::Compound)
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// Deserialize a display field from whatever value the record holds
fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Null => String::new(),
        Scalar::Compound => {
            tracing::warn!("Ignoring a post field that is not text");
            String::new()
        }
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawList {
    Items(Vec<Scalar>),
    Other(IgnoredAny),
}

/// Deserialize a list of display strings, dropping entries that have no text
/// form
fn text_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawList>::deserialize(deserializer)? {
        Some(RawList::Items(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Scalar::Text(text) => Some(text),
                    Scalar::Null | Scalar::Compound => {
                        tracing::warn!("Skipping list entry that is not text");
                        None
                    }
                })
                .collect(),
        ),
        Some(RawList::Other(_)) => {
            tracing::warn!("Ignoring a list that is not an array");
            None
        }
        None => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawContent {
    Content(PostContent),
    Other(IgnoredAny),
}

/// Deserialize a post body, treating a body of the wrong shape as absent
fn post_content<'de, D>(deserializer: D) -> Result<Option<PostContent>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawContent>::deserialize(deserializer)? {
        Some(RawContent::Content(content)) => Some(content),
        Some(RawContent::Other(_)) => {
            tracing::warn!("Ignoring post content that is not an object");
            None
        }
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_post() {
        let json = r#"{
            "slug": "pancakes",
            "title": "Pancakes",
            "excerpt": "Fluffy.",
            "image": "/images/pancakes.jpg",
            "category": "Breakfast",
            "date": "2024-01-15",
            "content": {
                "paragraphs": ["Start here.", {"type": "ingredient"}, {"type": "step"}],
                "ingredients": ["Flour", "Milk"],
                "steps": ["Mix", "Fry"]
            }
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.slug, "pancakes");
        assert_eq!(
            post.paragraphs(),
            &[
                ContentItem::Text("Start here.".to_string()),
                ContentItem::Ingredients,
                ContentItem::Steps,
            ]
        );
        let content = post.content.unwrap();
        assert_eq!(content.steps.unwrap(), vec!["Mix", "Fry"]);
    }

    #[test]
    fn test_sparse_post() {
        let post: Post = serde_json::from_str(r#"{"slug": "bare"}"#).unwrap();
        assert_eq!(post.title, "");
        assert!(post.content.is_none());
        assert!(post.paragraphs().is_empty());

        let post: Post =
            serde_json::from_str(r#"{"slug": "nulls", "content": {"paragraphs": null}}"#).unwrap();
        assert!(post.paragraphs().is_empty());
    }

    #[test]
    fn test_unknown_entries_are_dropped() {
        let json = r#"{"content": {"paragraphs": ["a", {"type": "video"}, 42, {"kind": "x"}, "b"]}}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(
            post.paragraphs(),
            &[
                ContentItem::Text("a".to_string()),
                ContentItem::Text("b".to_string())
            ]
        );
    }

    #[test]
    fn test_null_and_scalar_fields() {
        let json = r#"{"slug": "a", "title": null, "excerpt": 42, "category": true, "date": null}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.slug, "a");
        assert_eq!(post.title, "");
        assert_eq!(post.excerpt, "42");
        assert_eq!(post.category, "true");
        assert_eq!(post.date, "");

        let post: Post = serde_json::from_str(r#"{"slug": "b", "title": ["x"]}"#).unwrap();
        assert_eq!(post.title, "");
    }

    #[test]
    fn test_loose_lists() {
        let json = r#"{"content": {
            "paragraphs": [{"type": "ingredient"}],
            "ingredients": ["2 eggs", 3, null, {"a": 1}, 1.5],
            "steps": "Mix"
        }}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        let content = post.content.unwrap();
        assert_eq!(content.ingredients.unwrap(), vec!["2 eggs", "3", "1.5"]);
        assert_eq!(content.steps, None);
        assert_eq!(content.paragraphs.unwrap(), vec![ContentItem::Ingredients]);
    }

    #[test]
    fn test_content_of_wrong_shape_is_absent() {
        let post: Post = serde_json::from_str(r#"{"slug": "c", "content": "text"}"#).unwrap();
        assert!(post.content.is_none());
        assert!(post.paragraphs().is_empty());
    }
}
