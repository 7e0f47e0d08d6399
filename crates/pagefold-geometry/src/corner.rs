//! Corner identities, the category bijection, and per-corner curl sizes.

use crate::config::CurlConfig;

/// One of the four screen corners carrying a curl affordance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CornerId {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CornerId {
    /// All corners in clip-polygon order (clockwise from top-left).
    pub const ALL: [CornerId; 4] = [
        CornerId::TopLeft,
        CornerId::TopRight,
        CornerId::BottomLeft,
        CornerId::BottomRight,
    ];

    pub const fn index(self) -> usize {
        match self {
            CornerId::TopLeft => 0,
            CornerId::TopRight => 1,
            CornerId::BottomLeft => 2,
            CornerId::BottomRight => 3,
        }
    }

    /// The content category this corner navigates to. The mapping is a fixed
    /// bijection; there is deliberately no way to rebind it at runtime.
    pub const fn category(self) -> Category {
        match self {
            CornerId::TopLeft => Category::Development,
            CornerId::TopRight => Category::Design,
            CornerId::BottomLeft => Category::Music,
            CornerId::BottomRight => Category::Project,
        }
    }

    /// Sign applied to the pointer delta on each axis so that dragging toward
    /// the page center always grows the fold.
    pub const fn delta_signs(self) -> (f32, f32) {
        match self {
            CornerId::TopLeft => (1.0, 1.0),
            CornerId::TopRight => (-1.0, 1.0),
            CornerId::BottomLeft => (1.0, -1.0),
            CornerId::BottomRight => (-1.0, -1.0),
        }
    }

    /// Kebab-case name matching the host page's corner markup.
    pub const fn as_str(self) -> &'static str {
        match self {
            CornerId::TopLeft => "top-left",
            CornerId::TopRight => "top-right",
            CornerId::BottomLeft => "bottom-left",
            CornerId::BottomRight => "bottom-right",
        }
    }
}

/// Content category bound to a corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Development,
    Design,
    Music,
    Project,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Development,
        Category::Design,
        Category::Music,
        Category::Project,
    ];

    /// Lowercase key used in catalog data and navigation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Development => "development",
            Category::Design => "design",
            Category::Music => "music",
            Category::Project => "project",
        }
    }

    /// Capitalized label shown in the gallery title.
    pub const fn display_name(self) -> &'static str {
        match self {
            Category::Development => "Development",
            Category::Design => "Design",
            Category::Music => "Music",
            Category::Project => "Project",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == key)
    }

    /// The corner this category is bound to (inverse of [`CornerId::category`]).
    pub const fn corner(self) -> CornerId {
        match self {
            Category::Development => CornerId::TopLeft,
            Category::Design => CornerId::TopRight,
            Category::Music => CornerId::BottomLeft,
            Category::Project => CornerId::BottomRight,
        }
    }
}

/// Fold extent of one corner along each axis, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CurlSize {
    pub x: f32,
    pub y: f32,
}

impl CurlSize {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: CurlSize = CurlSize { x: 0.0, y: 0.0 };

    /// Same extent on both axes (the resting and expanded shapes are square).
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }

    /// The commit decision and the shadow footprint both use the mean extent.
    pub fn average(&self) -> f32 {
        (self.x + self.y) / 2.0
    }
}

/// Authoritative fold sizes for all four corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurlSizes {
    sizes: [CurlSize; 4],
}

impl CurlSizes {
    /// All corners at the resting size from the given config.
    pub fn resting(config: &CurlConfig) -> Self {
        Self {
            sizes: [CurlSize::splat(config.initial_size as f32); 4],
        }
    }

    pub fn get(&self, corner: CornerId) -> CurlSize {
        self.sizes[corner.index()]
    }

    pub fn set(&mut self, corner: CornerId, size: CurlSize) {
        self.sizes[corner.index()] = size;
    }

    /// Force every corner to the same size. Used to zero out the losing
    /// corners the moment a commit starts.
    pub fn set_all(&mut self, size: CurlSize) {
        self.sizes = [size; 4];
    }

    pub fn reset_to_config(&mut self, config: &CurlConfig) {
        self.set_all(CurlSize::splat(config.initial_size as f32));
    }
}

#[cfg(test)]
#[path = "tests/corner_tests.rs"]
mod tests;
