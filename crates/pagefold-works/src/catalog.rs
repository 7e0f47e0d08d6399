//! The four per-category work lists and their loading rules.

use pagefold_geometry::Category;
use serde_json::Value;

use crate::model::WorkItem;

/// Normalized works data, one list per [`Category`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    lists: [Vec<WorkItem>; 4],
}

impl Catalog {
    /// Parse and normalize raw catalog JSON.
    ///
    /// Unknown fields are ignored, malformed entries are dropped, and items
    /// without an `id` get a generated `"{category}-{n}"` one. A document
    /// that normalizes to zero items across every category is treated the
    /// same as a missing file: the fallback catalog is returned instead.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let document: Value = serde_json::from_str(raw)?;
        let catalog = Self::from_value(&document);
        if catalog.is_empty() {
            log::warn!("works data normalized to an empty catalog, using fallback");
            return Ok(Self::fallback());
        }
        Ok(catalog)
    }

    /// [`Catalog::from_json`], but a parse failure degrades to the fallback
    /// catalog instead of propagating.
    pub fn from_json_or_fallback(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(catalog) => catalog,
            Err(error) => {
                log::error!("failed to parse works data: {error}");
                Self::fallback()
            }
        }
    }

    fn from_value(document: &Value) -> Self {
        let mut lists: [Vec<WorkItem>; 4] = Default::default();
        for (slot, category) in lists.iter_mut().zip(Category::ALL) {
            let Some(entries) = document.get(category.as_str()).and_then(Value::as_array) else {
                continue;
            };
            *slot = entries
                .iter()
                .enumerate()
                .filter_map(|(index, entry)| {
                    let fallback_id = format!("{}-{}", category.as_str(), index + 1);
                    WorkItem::normalize(entry, &fallback_id)
                })
                .collect();
        }
        Self { lists }
    }

    /// Placeholder content shown until real catalog data is available.
    pub fn fallback() -> Self {
        fn item(id: &str, title: &str, description: &str, tags: &[&str]) -> WorkItem {
            WorkItem {
                id: id.to_owned(),
                title: title.to_owned(),
                description: description.to_owned(),
                tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
                image: None,
                images: Vec::new(),
                links: Vec::new(),
            }
        }

        Self {
            lists: [
                vec![
                    item(
                        "dev-1",
                        "Web Application",
                        "A modern web application built with React and TypeScript",
                        &["React", "TypeScript", "Node.js"],
                    ),
                    item(
                        "dev-2",
                        "API Service",
                        "A backend service combining RESTful APIs with GraphQL",
                        &["GraphQL", "Express", "MongoDB"],
                    ),
                    item(
                        "dev-3",
                        "Mobile App",
                        "A cross-platform app developed with React Native",
                        &["React Native", "Firebase"],
                    ),
                ],
                vec![
                    item(
                        "design-1",
                        "Brand Identity",
                        "Visual identity design for corporate brands",
                        &["Branding", "Logo Design"],
                    ),
                    item(
                        "design-2",
                        "UI/UX Design",
                        "Interface design focused on the user experience",
                        &["UI Design", "UX Research"],
                    ),
                ],
                vec![
                    item(
                        "music-1",
                        "Original Composition",
                        "Original music composition and arrangement",
                        &["Composition", "Arrangement"],
                    ),
                    item(
                        "music-2",
                        "Sound Design",
                        "Sound design for games and film",
                        &["Sound Design", "Foley"],
                    ),
                ],
                vec![
                    item(
                        "project-1",
                        "Portfolio Website",
                        "The making of this portfolio site itself",
                        &["Three.js", "GSAP", "Web Design"],
                    ),
                    item(
                        "project-2",
                        "Open Source",
                        "Contributions to open source projects",
                        &["Open Source", "GitHub"],
                    ),
                ],
            ],
        }
    }

    pub fn items(&self, category: Category) -> &[WorkItem] {
        &self.lists[category.corner().index()]
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }

    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
