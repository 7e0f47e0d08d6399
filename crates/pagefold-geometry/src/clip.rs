//! Clip polygon composer: four corner folds into one 8-point octagon.

use crate::corner::{CornerId, CurlSize, CurlSizes};
use crate::geometry::{Point, Viewport};

/// Shadow footprint is proportional to the mean fold extent.
const SHADOW_MULTIPLIER: f32 = 3.0;

/// Derived visual geometry for one set of corner sizes: the page clip
/// polygon plus the square shadow size behind each fold.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipGeometry {
    /// Octagon vertices in viewport coordinates, clockwise from the
    /// top-left inset.
    pub points: [Point; 8],
    /// Shadow edge length per corner, indexed by [`CornerId::index`].
    pub shadow_sizes: [f32; 4],
}

impl ClipGeometry {
    pub fn shadow_size(&self, corner: CornerId) -> f32 {
        self.shadow_sizes[corner.index()]
    }

    /// CSS `polygon(...)` string in the shape the host page applies as a
    /// `clip-path`, using `calc(100% - Npx)` for the right/bottom edges so
    /// the path survives viewport resizes between style recomputations.
    /// The first vertex is repeated at the end to close the path.
    pub fn to_css_polygon(&self, sizes: &CurlSizes) -> String {
        let tl = sizes.get(CornerId::TopLeft);
        let tr = sizes.get(CornerId::TopRight);
        let bl = sizes.get(CornerId::BottomLeft);
        let br = sizes.get(CornerId::BottomRight);
        format!(
            "polygon(0 {}px, {}px 0, calc(100% - {}px) 0, 100% {}px, \
             100% calc(100% - {}px), calc(100% - {}px) 100%, {}px 100%, \
             0 calc(100% - {}px), 0 {}px)",
            tl.y, tl.x, tr.x, tr.y, br.y, br.x, bl.x, bl.y, tl.y,
        )
    }
}

/// Compose the clip polygon and shadow sizes from the current corner sizes.
/// Pure function; runs on every pointer move, so it allocates nothing.
pub fn compose(sizes: &CurlSizes, viewport: Viewport) -> ClipGeometry {
    let (w, h) = (viewport.width, viewport.height);
    let tl = sizes.get(CornerId::TopLeft);
    let tr = sizes.get(CornerId::TopRight);
    let bl = sizes.get(CornerId::BottomLeft);
    let br = sizes.get(CornerId::BottomRight);

    let points = [
        Point::new(0.0, tl.y),
        Point::new(tl.x, 0.0),
        Point::new(w - tr.x, 0.0),
        Point::new(w, tr.y),
        Point::new(w, h - br.y),
        Point::new(w - br.x, h),
        Point::new(bl.x, h),
        Point::new(0.0, h - bl.y),
    ];

    let mut shadow_sizes = [0.0f32; 4];
    for corner in CornerId::ALL {
        shadow_sizes[corner.index()] = sizes.get(corner).average() * SHADOW_MULTIPLIER;
    }

    ClipGeometry {
        points,
        shadow_sizes,
    }
}

/// Border widths the host applies to a corner's fold element, in CSS order
/// (top, right, bottom, left). The fold triangle is drawn with a border
/// trick: left corners hang off the left edge, right corners off the right.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BorderWidths {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

pub fn border_widths(corner: CornerId, size: CurlSize) -> BorderWidths {
    match corner {
        CornerId::TopLeft | CornerId::BottomRight => BorderWidths {
            top: 0.0,
            right: 0.0,
            bottom: size.y,
            left: size.x,
        },
        CornerId::TopRight | CornerId::BottomLeft => BorderWidths {
            top: 0.0,
            right: size.x,
            bottom: size.y,
            left: 0.0,
        },
    }
}

/// Which corner's fold rectangle contains `point`, if any. Host-side hit
/// test replacing per-element listeners; fold extents come from the current
/// sizes so the hit region grows with the fold.
pub fn hit_corner(sizes: &CurlSizes, viewport: Viewport, point: Point) -> Option<CornerId> {
    if !viewport.contains(point) {
        return None;
    }
    let (w, h) = (viewport.width, viewport.height);
    CornerId::ALL.into_iter().find(|&corner| {
        let size = sizes.get(corner);
        match corner {
            CornerId::TopLeft => point.x <= size.x && point.y <= size.y,
            CornerId::TopRight => point.x >= w - size.x && point.y <= size.y,
            CornerId::BottomLeft => point.x <= size.x && point.y >= h - size.y,
            CornerId::BottomRight => point.x >= w - size.x && point.y >= h - size.y,
        }
    })
}

#[cfg(test)]
#[path = "tests/clip_tests.rs"]
mod tests;
