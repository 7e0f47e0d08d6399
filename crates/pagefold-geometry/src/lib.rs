//! Pure math/data for the pagefold corner-curl geometry
//!
//! This crate contains the viewport primitives, corner definitions, the
//! responsive curl configuration, and the clip-polygon composer that the
//! interaction layer drives. Nothing in here touches a display or an event
//! loop; every function is a total function of its inputs so the whole crate
//! is unit-testable on its own.

mod clip;
mod config;
mod corner;
mod geometry;
mod orbit;

pub use clip::*;
pub use config::*;
pub use corner::*;
pub use geometry::*;
pub use orbit::*;

pub mod prelude {
    pub use crate::clip::{border_widths, compose, BorderWidths, ClipGeometry};
    pub use crate::config::{clamp, curl_scale, CurlConfig};
    pub use crate::corner::{Category, CornerId, CurlSize, CurlSizes};
    pub use crate::geometry::{Point, Size, Viewport};
    pub use crate::orbit::{Vec3, ViewSector};
}
