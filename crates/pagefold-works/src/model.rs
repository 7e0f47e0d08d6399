//! Normalized gallery model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An external link attached to a work.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLink {
    pub label: String,
    pub url: String,
}

/// One portfolio entry, fully normalized: `tags`, `images`, and `links` are
/// always present (possibly empty) and `image` is the primary image if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub links: Vec<WorkLink>,
}

impl WorkItem {
    /// Build an item from a raw JSON value, or `None` when it has no title.
    ///
    /// `fallback_id` is used when the entry carries no string `id`.
    pub(crate) fn normalize(raw: &Value, fallback_id: &str) -> Option<Self> {
        let title = non_empty_str(raw.get("title"))?;

        let description = string_field(raw.get("description")).unwrap_or_default();
        let declared_image =
            string_field(raw.get("image")).or_else(|| string_field(raw.get("imageUrl")));
        let images = normalize_images(raw);
        let image = declared_image.or_else(|| images.first().cloned());
        // An explicit `links: null` falls through to `relatedLinks`; an
        // empty array does not.
        let links = normalize_links(
            raw.get("links")
                .filter(|value| !value.is_null())
                .or_else(|| raw.get("relatedLinks")),
        );

        Some(Self {
            id: string_field(raw.get("id")).unwrap_or_else(|| fallback_id.to_owned()),
            title,
            description,
            tags: normalize_tags(raw.get("tags")),
            image,
            images,
            links,
        })
    }
}

fn string_field(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    string_field(value).filter(|s| !s.is_empty())
}

/// Tags come either as an array of strings or as one comma-separated string.
fn normalize_tags(tags: Option<&Value>) -> Vec<String> {
    match tags {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect(),
        Some(Value::String(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

/// Merge `images`, `relatedImages`, and `gallery` into one list, with the
/// primary `image` prepended if it is not already there.
fn normalize_images(raw: &Value) -> Vec<String> {
    let mut images: Vec<String> = ["images", "relatedImages", "gallery"]
        .iter()
        .filter_map(|key| raw.get(*key))
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|image| !image.is_empty())
        .map(str::to_owned)
        .collect();

    if let Some(primary) = raw.get("image").and_then(Value::as_str) {
        let primary = primary.trim();
        if !primary.is_empty() && !images.iter().any(|image| image == primary) {
            images.insert(0, primary.to_owned());
        }
    }
    images
}

/// Links accept bare URL strings or `{url|href, label|title}` objects.
/// Entries without a usable URL are dropped.
fn normalize_links(links: Option<&Value>) -> Vec<WorkLink> {
    let Some(Value::Array(entries)) = links else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(url) => Some(WorkLink {
                label: strip_scheme(url).to_owned(),
                url: url.clone(),
            }),
            Value::Object(_) => {
                let url = string_field(entry.get("url"))
                    .or_else(|| string_field(entry.get("href")))
                    .filter(|url| !url.is_empty())?;
                let label = string_field(entry.get("label"))
                    .or_else(|| string_field(entry.get("title")))
                    .unwrap_or_else(|| url.clone());
                Some(WorkLink { label, url })
            }
            _ => None,
        })
        .collect()
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
